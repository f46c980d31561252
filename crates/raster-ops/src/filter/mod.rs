//! Fixed 3x3 neighborhood filters.
//!
//! Both filters write interior cells only. Row 0, the last row, column 0 and
//! the last column of the output stay 0: there is no edge replication or
//! reflection padding. Inputs narrower or shorter than 3 have no interior
//! and produce an all-zero buffer.

mod blur;
mod edges;
mod kernel;

use std::ops::Range;

pub use blur::gaussian_blur;
pub use edges::{detect_edges, EDGE_THRESHOLD, EDGE_VALUE};
pub use kernel::{Kernel3, GAUSSIAN_3X3, SOBEL_X, SOBEL_Y};

use crate::buffer::GrayBuffer;

/// Blur then threshold gradients: the full edge-map pipeline.
pub fn edge_map(gray: &GrayBuffer) -> GrayBuffer {
    detect_edges(&gaussian_blur(gray))
}

/// Indices `1..len-1`, empty when `len < 3`.
#[inline]
fn interior(len: usize) -> Range<usize> {
    1..len.saturating_sub(1)
}
