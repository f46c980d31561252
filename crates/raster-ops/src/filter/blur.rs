//! 3x3 binomial blur.

use super::{interior, GAUSSIAN_3X3};
use crate::buffer::GrayBuffer;

/// Blur a single-channel buffer with [`GAUSSIAN_3X3`].
///
/// Each interior output cell is the weighted neighborhood sum divided by 16
/// with integer truncation. Border cells are left at 0.
pub fn gaussian_blur(image: &GrayBuffer) -> GrayBuffer {
    let mut blurred = GrayBuffer::filled(image.width(), image.height(), 0);

    for row in interior(image.height()) {
        for col in interior(image.width()) {
            // a normalized kernel over u8 samples stays within 0..=255
            blurred[(row, col)] = GAUSSIAN_3X3.apply(image, row, col).clamp(0, 255) as u8;
        }
    }

    blurred
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_border_zero(image: &GrayBuffer) {
        let (w, h) = (image.width(), image.height());
        for row in 0..h {
            for col in 0..w {
                if row == 0 || col == 0 || row == h - 1 || col == w - 1 {
                    assert_eq!(image[(row, col)], 0, "border cell ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_flat_interior_preserved() {
        let image = GrayBuffer::new(4, 4, 128).unwrap();
        let blurred = gaussian_blur(&image);

        assert_eq!(blurred.row(0), &[0, 0, 0, 0]);
        assert_eq!(blurred.row(1), &[0, 128, 128, 0]);
        assert_eq!(blurred.row(2), &[0, 128, 128, 0]);
        assert_eq!(blurred.row(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_border_is_zero_for_bright_input() {
        let image = GrayBuffer::new(7, 5, 255).unwrap();
        let blurred = gaussian_blur(&image);
        assert_border_zero(&blurred);
        assert_eq!(blurred[(2, 3)], 255);
    }

    #[test]
    fn test_single_spike() {
        let mut image = GrayBuffer::new(5, 5, 0).unwrap();
        image[(2, 2)] = 160;
        let blurred = gaussian_blur(&image);

        assert_eq!(blurred[(2, 2)], 40); // 160 * 4 / 16
        assert_eq!(blurred[(1, 2)], 20); // 160 * 2 / 16
        assert_eq!(blurred[(1, 1)], 10); // 160 * 1 / 16
        assert_eq!(blurred[(0, 2)], 0);
    }

    #[test]
    fn test_truncation_not_rounding() {
        let mut image = GrayBuffer::new(3, 3, 0).unwrap();
        image[(1, 1)] = 255;
        // 1020 / 16 = 63.75
        assert_eq!(gaussian_blur(&image)[(1, 1)], 63);
    }

    #[test]
    fn test_degenerate_sizes_are_all_zero() {
        for (w, h) in [(1, 1), (2, 5), (5, 2), (2, 2)] {
            let image = GrayBuffer::new(w, h, 200).unwrap();
            let blurred = gaussian_blur(&image);
            assert_eq!(blurred.width(), w);
            assert_eq!(blurred.height(), h);
            assert!(blurred.as_slice().iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_input_unchanged() {
        let image = GrayBuffer::new(4, 4, 90).unwrap();
        let copy = image.clone();
        let _ = gaussian_blur(&image);
        assert_eq!(image, copy);
    }
}
