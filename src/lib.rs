//! A [Cartesian tree] over an ordered sequence of values.
//!
//! A [`CartesianTree`] is built in linear time from any sequence of [`Ord`]
//! values, and is simultaneously a min-heap over the values and a binary search
//! tree over their positions in the input sequence. This allows:
//!
//! * Reconstruction of the original sequence by an in-order traversal.
//! * Range minimum queries over any inclusive range of positions, answered in
//!   O(height) time by locating the lowest common ancestor of the range.
//!
//! ```
//! use cartree::CartesianTree;
//!
//! let t = CartesianTree::build([4, 2, 6, 1, 5, 3]);
//!
//! // The minimum value between positions 1 and 4 (inclusive).
//! assert_eq!(t.range_minimum(1, 4), Ok(&1));
//!
//! // An in-order traversal yields the input sequence.
//! assert!(t.iter().eq(&[4, 2, 6, 1, 5, 3]));
//!
//! // Both structural invariants hold.
//! assert!(t.verify().is_valid());
//! ```
//!
//! Query time depends on the shape of the tree, which depends on the input: a
//! monotonic sequence produces a fully skewed tree with O(n) queries. All
//! traversals use an explicit stack, so skewed trees of any size are safe to
//! iterate, verify, render and drop.
//!
//! [Cartesian tree]: https://en.wikipedia.org/wiki/Cartesian_tree

#![deny(unsafe_code)]

mod build;
mod error;
mod fmt;
mod iter;
mod node;
mod query;
mod tree;
mod verify;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use fmt::{Dot, Pretty};
pub use iter::{InOrder, IntoIter, PreOrder};
pub use node::Node;
pub use tree::CartesianTree;
pub use verify::Verification;
