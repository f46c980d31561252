use super::{quantization_level, HALFTONE_PATTERNS, PATTERN_ON};
use crate::buffer::GrayBuffer;

/// Expand every sample into the 2x2 pattern for its quantization level.
///
/// Sample `(row, col)` fills output block `[2*row..2*row+2, 2*col..2*col+2]`
/// with [`PATTERN_ON`] where the mask is 1 and 0 elsewhere.
pub fn halftone(image: &GrayBuffer) -> GrayBuffer {
    let mut output = GrayBuffer::filled(image.width() * 2, image.height() * 2, 0);

    for (row, samples) in image.rows().enumerate() {
        for (col, &sample) in samples.iter().enumerate() {
            let pattern = &HALFTONE_PATTERNS[quantization_level(sample)];
            for (dy, mask_row) in pattern.iter().enumerate() {
                for (dx, &bit) in mask_row.iter().enumerate() {
                    output[(2 * row + dy, 2 * col + dx)] = if bit == 1 { PATTERN_ON } else { 0 };
                }
            }
        }
    }

    output
}
