use std::fmt;

/// Error type for range-minimum queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The query bounds do not satisfy `lo <= hi < len`.
    InvalidRange {
        /// The inclusive lower bound of the query.
        lo: usize,
        /// The inclusive upper bound of the query.
        hi: usize,
        /// The number of elements in the tree.
        len: usize,
    },
    /// The tree was built from an empty sequence.
    EmptyTree,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { lo, hi, len } => {
                write!(f, "invalid query range [{lo}, {hi}] for tree of length {len}")
            }
            Error::EmptyTree => write!(f, "cannot query an empty tree"),
        }
    }
}

impl std::error::Error for Error {}
