//! The [`Buffer2D`] grid type.

use std::ops::{Index, IndexMut};

use super::BufferError;
use crate::color::Rgb;

/// A buffer of RGB samples, as produced by an image decoder.
pub type RgbBuffer = Buffer2D<Rgb>;

/// A single-channel buffer of 8-bit samples.
pub type GrayBuffer = Buffer2D<u8>;

/// A dense rectangular grid of samples in row-major order.
///
/// Samples are addressed as `(row, col)`, both zero-based. Every buffer has
/// at least one row and one column, and all rows have the same length:
/// storage is a single flat `Vec<T>` so rectangularity holds by
/// construction.
///
/// Transforms never mutate their input. Each one allocates and returns a
/// new buffer.
///
/// # Example
///
/// ```
/// use raster_ops::Buffer2D;
///
/// let buffer = Buffer2D::from_rows(vec![vec![1u8, 2, 3], vec![4, 5, 6]]).unwrap();
///
/// assert_eq!(buffer.width(), 3);
/// assert_eq!(buffer.height(), 2);
/// assert_eq!(buffer[(1, 0)], 4);
/// assert_eq!(buffer.row(0), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer2D<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Buffer2D<T> {
    /// Create a `width` x `height` buffer with every sample set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self, BufferError> {
        check_dimensions(width, height)?;
        Ok(Self::filled(width, height, fill))
    }

    /// Infallible constructor for dimensions derived from an existing buffer.
    pub(crate) fn filled(width: usize, height: usize, fill: T) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "derived dimensions must be non-zero ({}x{})",
            width,
            height
        );
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T> Buffer2D<T> {
    /// Build a buffer from a sequence of rows.
    ///
    /// Fails if there are no rows, if the first row is empty, or if any row
    /// differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, BufferError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BufferError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Wrap flat row-major data.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, BufferError> {
        check_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(BufferError::LengthMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Samples of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.width)
    }

    /// All samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the buffer, returning its row-major samples.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every sample, producing a new buffer of the same size.
    pub fn map<U, F>(&self, f: F) -> Buffer2D<U>
    where
        F: FnMut(&T) -> U,
    {
        Buffer2D {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> Index<(usize, usize)> for Buffer2D<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} buffer",
            row,
            col,
            self.width,
            self.height
        );
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Buffer2D<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} buffer",
            row,
            col,
            self.width,
            self.height
        );
        &mut self.data[row * self.width + col]
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BufferError> {
    if width == 0 || height == 0 {
        Err(BufferError::EmptyDimensions { width, height })
    } else {
        Ok(())
    }
}
