//! Dense 2D sample buffers.
//!
//! [`Buffer2D`] is the data model every transform reads and writes: a
//! rectangular, row-major grid with at least one row and one column.

mod buffer2d;
mod error;

pub use buffer2d::{Buffer2D, GrayBuffer, RgbBuffer};
pub use error::BufferError;
