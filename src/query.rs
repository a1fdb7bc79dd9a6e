use tracing::{debug, trace};

use crate::{error::Error, node::Node, CartesianTree};

impl<T> CartesianTree<T> {
    /// Return the minimum value within the inclusive position range
    /// `[lo, hi]`.
    ///
    /// Runs in O(height) time, which is O(n) for a fully skewed tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree contains no values, and
    /// [`Error::InvalidRange`] if `lo > hi` or `hi` is out of bounds.
    pub fn range_minimum(&self, lo: usize, hi: usize) -> Result<&T, Error> {
        self.range_minimum_node(lo, hi).map(Node::value)
    }

    /// Return the [`Node`] holding the minimum value within the inclusive
    /// position range `[lo, hi]`.
    ///
    /// When the minimum value appears more than once in the range, the node
    /// for the last occurrence is returned.
    ///
    /// # Errors
    ///
    /// See [`CartesianTree::range_minimum()`].
    pub fn range_minimum_node(&self, lo: usize, hi: usize) -> Result<&Node<T>, Error> {
        let ret = self.check_range(lo, hi).and_then(|root| {
            // The first node on the descent from the root that falls within the
            // range is the lowest common ancestor of every node in the range,
            // and by the heap property holds the range minimum.
            let mut ptr = Some(root);
            while let Some(n) = ptr {
                let pos = n.position();
                if pos > hi {
                    ptr = n.left();
                } else if pos < lo {
                    ptr = n.right();
                } else {
                    return Ok(n);
                }
            }

            // Unreachable for a well-formed tree: a validated range always
            // contains at least one node.
            Err(Error::InvalidRange {
                lo,
                hi,
                len: self.len(),
            })
        });

        match &ret {
            Ok(n) => trace!(lo, hi, position = n.position(), "resolved range minimum"),
            Err(error) => debug!(lo, hi, %error, "rejected range minimum query"),
        }

        ret
    }

    /// Validate the query bounds, returning the root node.
    fn check_range(&self, lo: usize, hi: usize) -> Result<&Node<T>, Error> {
        let root = self.root().ok_or(Error::EmptyTree)?;

        if lo > hi || hi >= self.len() {
            return Err(Error::InvalidRange {
                lo,
                hi,
                len: self.len(),
            });
        }

        Ok(root)
    }
}
