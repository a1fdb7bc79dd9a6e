use std::fmt::Debug;

/// A single element of a [`CartesianTree`], holding the element value and its
/// position in the input sequence.
///
/// [`CartesianTree`]: crate::CartesianTree
pub struct Node<T> {
    /// Child nodes pointers.
    ///
    /// Every node in the left subtree has a lower position than this node, and
    /// every node in the right subtree a higher position.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The 0-based index of this element in the input sequence.
    position: usize,
    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(position: usize, value: T) -> Self {
        Self {
            left: None,
            right: None,
            position,
            value,
        }
    }

    /// The element value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The position of this element in the input sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Link `child` as the left subtree, returning the previous left subtree.
    pub(crate) fn set_left(&mut self, child: Option<Box<Self>>) -> Option<Box<Self>> {
        std::mem::replace(&mut self.left, child)
    }

    /// Link `child` as the right subtree, returning the previous right
    /// subtree.
    pub(crate) fn set_right(&mut self, child: Option<Box<Self>>) -> Option<Box<Self>> {
        std::mem::replace(&mut self.right, child)
    }

    #[cfg(test)]
    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    #[cfg(test)]
    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the position and value `T` it contains.
    pub(crate) fn into_tuple(self) -> (usize, T) {
        (self.position, self.value)
    }
}

// A derived impl would recurse through the whole subtree. Children are
// identified by position only.
impl<T> Debug for Node<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("position", &self.position)
            .field("value", &self.value)
            .field("left", &self.left().map(Node::position))
            .field("right", &self.right().map(Node::position))
            .finish()
    }
}
