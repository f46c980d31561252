//! Sobel gradient-magnitude edge detector with a hard threshold.

use super::{interior, SOBEL_X, SOBEL_Y};
use crate::buffer::GrayBuffer;

/// Gradient magnitude above which a cell is marked as an edge.
pub const EDGE_THRESHOLD: f64 = 100.0;

/// Output value of an edge cell. Non-edge cells are 0.
pub const EDGE_VALUE: u8 = 255;

/// Mark interior cells whose Sobel gradient magnitude exceeds
/// [`EDGE_THRESHOLD`].
///
/// `gx` and `gy` are raw (unnormalized) [`SOBEL_X`] / [`SOBEL_Y`] sums and
/// the magnitude is `sqrt(gx² + gy²)`. The output is binary: every cell is
/// either 0 or [`EDGE_VALUE`]. Border cells are left at 0.
pub fn detect_edges(image: &GrayBuffer) -> GrayBuffer {
    let mut edges = GrayBuffer::filled(image.width(), image.height(), 0);

    for row in interior(image.height()) {
        for col in interior(image.width()) {
            let gx = f64::from(SOBEL_X.weighted_sum(image, row, col));
            let gy = f64::from(SOBEL_Y.weighted_sum(image, row, col));
            let magnitude = (gx * gx + gy * gy).sqrt();
            if magnitude > EDGE_THRESHOLD {
                edges[(row, col)] = EDGE_VALUE;
            }
        }
    }

    edges
}
