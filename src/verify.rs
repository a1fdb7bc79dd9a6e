use tracing::debug;

use crate::{node::Node, CartesianTree};

/// The outcome of checking the structural invariants of a [`CartesianTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// True when no node has a child with a strictly smaller value.
    pub heap_ok: bool,

    /// True when every node in a left subtree has a lower position than the
    /// subtree parent, and every node in a right subtree a higher position.
    pub index_ok: bool,
}

impl Verification {
    /// Returns true if both invariants hold.
    pub fn is_valid(&self) -> bool {
        self.heap_ok && self.index_ok
    }
}

impl<T> CartesianTree<T>
where
    T: Ord,
{
    /// Independently re-check the heap and index invariants of this tree.
    ///
    /// An empty tree is valid.
    pub fn verify(&self) -> Verification {
        let v = Verification {
            heap_ok: check_heap(self.root()),
            index_ok: check_index(self.root()),
        };

        debug!(heap_ok = v.heap_ok, index_ok = v.index_ok, "verified tree");

        v
    }
}

/// Returns false if any node in the subtree rooted at `root` has a child with
/// a value strictly less than its own.
pub(crate) fn check_heap<T>(root: Option<&Node<T>>) -> bool
where
    T: Ord,
{
    let mut stack = root.into_iter().collect::<Vec<_>>();
    while let Some(n) = stack.pop() {
        for child in [n.left(), n.right()].into_iter().flatten() {
            if child.value() < n.value() {
                return false;
            }
            stack.push(child);
        }
    }

    true
}

/// Returns false if any node in the subtree rooted at `root` has a position
/// outside of the open bounds inherited from its ancestors.
pub(crate) fn check_index<T>(root: Option<&Node<T>>) -> bool {
    // A bound of None is unbounded.
    let mut stack = root
        .into_iter()
        .map(|n| (n, None, None))
        .collect::<Vec<(&Node<T>, Option<usize>, Option<usize>)>>();

    while let Some((n, lo, hi)) = stack.pop() {
        let pos = n.position();
        if lo.is_some_and(|lo| pos <= lo) || hi.is_some_and(|hi| pos >= hi) {
            return false;
        }

        if let Some(left) = n.left() {
            stack.push((left, lo, Some(pos)));
        }
        if let Some(right) = n.right() {
            stack.push((right, Some(pos), hi));
        }
    }

    true
}
