//! Error types for sorting and selection.
//!
//! Every fallible routine in this crate returns [`OrderError`]. Errors are raised at the point of
//! detection and never recovered internally; the contents of a sequence after a failed in-place call
//! are unspecified.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Broad class of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input itself is unusable (empty where an element is required, negative key, bad base).
    InvalidInput,
    /// An index or sub-range argument lies outside the sequence.
    OutOfRange,
}

/// Error type for ordering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The routine needs at least one element.
    EmptyInput,

    /// Integer radix sort only accepts non-negative keys.
    NegativeValue {
        /// Position of the first offending element.
        index: usize,
        /// The offending value.
        value: i64,
    },

    /// Radix base must be at least 2.
    InvalidBase(u64),

    /// `max - min + 1` buckets cannot be allocated.
    KeyRangeTooLarge {
        /// Smallest key in the input.
        min: i64,
        /// Largest key in the input.
        max: i64,
    },

    /// A single index falls outside `[0, len)`.
    OutOfRange {
        /// The index provided.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// A `[low, high]` sub-range is inverted or exceeds the sequence.
    InvalidRange {
        /// Inclusive lower bound provided.
        low: usize,
        /// Inclusive upper bound provided.
        high: usize,
        /// Length of the sequence.
        len: usize,
    },
}

impl OrderError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::NegativeValue { .. }
            | Self::InvalidBase(_)
            | Self::KeyRangeTooLarge { .. } => ErrorKind::InvalidInput,
            Self::OutOfRange { .. } | Self::InvalidRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

impl Display for OrderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Sequence must contain at least one element"),
            Self::NegativeValue { index, value } => {
                write!(f, "Negative value {value} at index {index} (radix sort needs keys >= 0)")
            }
            Self::InvalidBase(base) => write!(f, "Invalid radix base: {base} (must be >= 2)"),
            Self::KeyRangeTooLarge { min, max } => {
                write!(f, "Key range [{min}, {max}] is too wide for counting buckets")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range for sequence of length {len}")
            }
            Self::InvalidRange { low, high, len } => {
                write!(
                    f,
                    "Invalid range [{low}, {high}] for sequence of length {len} (need low <= high < len)"
                )
            }
        }
    }
}

impl Error for OrderError {}
