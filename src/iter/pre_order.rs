use std::iter::FusedIterator;

use crate::node::Node;

/// A pre-order iterator over the nodes of a [`CartesianTree`], yielding each
/// node before the nodes of its left subtree, followed by its right subtree.
///
/// [`CartesianTree`]: crate::CartesianTree
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited before
        // it.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}
