use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A range ended past the end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending (exclusive) end index.
    pub index: usize,
    /// The length of the collection.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range started after it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    #[allow(missing_docs)]
    pub start: usize,
    #[allow(missing_docs)]
    pub end: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} is greater than range end {}!", self.start, self.end)
    }
}

impl Error for InvalidRange {}

/// The ways [`try_fill`](super::try_fill) can reject a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum FillError {
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
}
