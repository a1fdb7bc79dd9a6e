use tracing::debug;

use crate::node::Node;

/// Construct the Cartesian tree of `values` in a single left-to-right pass,
/// returning the root (if any) and the number of nodes.
///
/// The stack holds the right spine of the tree built so far, with values
/// strictly increasing from bottom to top. A stacked node has no right child
/// linked: the node directly above it in the stack is its pending right child,
/// and the link is materialised when the upper node is popped.
///
/// Each new node pops every stacked node with a value greater than or equal to
/// its own; the last popped node (carrying the rest of the popped chain as its
/// right subtree) becomes the left child of the new node. Popping on equality
/// places the later of two equal values above the earlier one.
///
/// Every node is pushed and popped exactly once, so construction is O(n).
pub(crate) fn build<T, I>(values: I) -> (Option<Box<Node<T>>>, usize)
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let values = values.into_iter();
    let mut stack: Vec<Box<Node<T>>> = Vec::with_capacity(values.size_hint().0);
    let mut n_values = 0;

    for (position, value) in values.enumerate() {
        let mut node = Box::new(Node::new(position, value));
        let mut last_popped = None;

        while let Some(mut top) = stack.pop() {
            if top.value() < node.value() {
                stack.push(top);
                break;
            }

            // The previously popped node was above "top" in the stack, and is
            // therefore its right child.
            top.set_right(last_popped.take());
            last_popped = Some(top);
        }

        node.set_left(last_popped);

        // Invariant: the stack values strictly increase towards the top.
        debug_assert!(stack.last().map_or(true, |top| top.value() < node.value()));

        stack.push(node);
        n_values = position + 1;
    }

    // Fold the remaining right spine into the root, linking each node as the
    // right child of the node below it.
    let mut root = None;
    while let Some(mut node) = stack.pop() {
        node.set_right(root.take());
        root = Some(node);
    }

    debug!(n_values, "built cartesian tree");

    (root, n_values)
}
