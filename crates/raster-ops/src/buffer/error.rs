//! Error type for buffer construction.

use std::fmt;

/// Error returned when a [`Buffer2D`](super::Buffer2D) cannot be built from
/// the given dimensions or data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    EmptyDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// A row's length differs from the first row's
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
    /// Flat data length is not `width * height`
    LengthMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the provided data
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyDimensions { width, height } => {
                write!(f, "buffer dimensions must be non-zero, got {}x{}", width, height)
            }
            BufferError::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} samples, expected {} like row 0",
                    row, actual, expected
                )
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer data has {} samples, expected width * height = {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
