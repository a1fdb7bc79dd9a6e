use std::fmt::Debug;

use crate::{
    build::build,
    iter::{InOrder, IntoIter, PreOrder},
    node::Node,
};

/// A Cartesian tree over a sequence of values.
///
/// Each value of the input sequence is held in exactly one [`Node`], along with
/// its position in the sequence. The tree is simultaneously:
///
/// * A min-heap over values: no node has a child with a smaller value.
/// * A binary search tree over positions: an in-order traversal yields the
///   input sequence in its original order.
///
/// The tree is built once in O(n) time and never mutated afterwards. For a
/// max-heap ordering, build the tree over [`std::cmp::Reverse`] values.
pub struct CartesianTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for CartesianTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> CartesianTree<T>
where
    T: Ord,
{
    /// Construct the Cartesian tree of `values` in O(n) time.
    ///
    /// Of two equal values, the later one becomes the ancestor of the earlier
    /// one.
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (root, len) = build(values);
        Self { root, len }
    }
}

impl<T> CartesianTree<T> {
    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree was built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, holding the (last) minimum value of the sequence.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty tree has a height of 0, and a single node a height of 1.
    pub fn height(&self) -> usize {
        let mut max = 0;

        let mut stack = self
            .root()
            .map(|v| vec![(v, 1)])
            .unwrap_or_default();

        while let Some((n, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(
                [n.left(), n.right()]
                    .into_iter()
                    .flatten()
                    .map(|v| (v, depth + 1)),
            );
        }

        max
    }

    /// Visit all nodes in position order, reproducing the input sequence.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Visit each node before its left subtree, followed by its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterate over the values in input order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.in_order().map(Node::value)
    }
}

impl<T> FromIterator<T> for CartesianTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T> From<Vec<T>> for CartesianTree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T> IntoIterator for CartesianTree<T> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<'a, T> IntoIterator for &'a CartesianTree<T> {
    type Item = &'a Node<T>;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

// Freeing a skewed tree recursively would use a stack frame per level.
impl<T> Drop for CartesianTree<T> {
    fn drop(&mut self) {
        drop(IntoIter::new(self.root.take()));
    }
}

impl<T> Debug for CartesianTree<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
