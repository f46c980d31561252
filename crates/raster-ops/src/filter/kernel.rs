//! 3x3 convolution kernel tables.

use crate::buffer::GrayBuffer;

/// A fixed 3x3 weight matrix with its normalization divisor.
///
/// `weights[dy][dx]` multiplies the sample at `(row + dy - 1, col + dx - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3 {
    /// Signed weights, indexed `[dy][dx]`.
    pub weights: [[i32; 3]; 3],
    /// Divisor applied by [`Kernel3::apply`]; 1 for unnormalized kernels.
    pub divisor: i32,
}

/// Binomial blur kernel, normalized by the sum of its weights.
///
/// ```text
///    1   2   1
///    2   4   2    / 16
///    1   2   1
/// ```
pub const GAUSSIAN_3X3: Kernel3 = Kernel3 {
    weights: [[1, 2, 1], [2, 4, 2], [1, 2, 1]],
    divisor: 16,
};

/// Horizontal Sobel derivative.
///
/// ```text
///   -1   0   1
///   -2   0   2
///   -1   0   1
/// ```
pub const SOBEL_X: Kernel3 = Kernel3 {
    weights: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    divisor: 1,
};

/// Vertical Sobel derivative, positive toward the top row.
///
/// ```text
///    1   2   1
///    0   0   0
///   -1  -2  -1
/// ```
pub const SOBEL_Y: Kernel3 = Kernel3 {
    weights: [[1, 2, 1], [0, 0, 0], [-1, -2, -1]],
    divisor: 1,
};

impl Kernel3 {
    /// Raw weighted sum of the 3x3 neighborhood centered on `(row, col)`.
    ///
    /// The caller must pass an interior cell: `1 <= row < height - 1` and
    /// `1 <= col < width - 1`.
    #[inline]
    pub fn weighted_sum(&self, image: &GrayBuffer, row: usize, col: usize) -> i32 {
        let mut total = 0;
        for (dy, weights) in self.weights.iter().enumerate() {
            let samples = &image.row(row + dy - 1)[col - 1..col + 2];
            for (&weight, &sample) in weights.iter().zip(samples) {
                total += weight * i32::from(sample);
            }
        }
        total
    }

    /// Weighted sum divided by [`Kernel3::divisor`], truncating toward zero.
    #[inline]
    pub fn apply(&self, image: &GrayBuffer, row: usize, col: usize) -> i32 {
        self.weighted_sum(image, row, col) / self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_3x3() -> GrayBuffer {
        GrayBuffer::from_rows(vec![vec![10, 20, 30], vec![40, 50, 60], vec![70, 80, 90]]).unwrap()
    }

    #[test]
    fn test_blur_divisor_is_weight_sum() {
        let sum: i32 = GAUSSIAN_3X3.weights.iter().flatten().sum();
        assert_eq!(sum, GAUSSIAN_3X3.divisor);
    }

    #[test]
    fn test_sobel_weights_cancel() {
        let sum_x: i32 = SOBEL_X.weights.iter().flatten().sum();
        let sum_y: i32 = SOBEL_Y.weights.iter().flatten().sum();
        assert_eq!(sum_x, 0);
        assert_eq!(sum_y, 0);
    }

    #[test]
    fn test_weighted_sum_on_ramp() {
        let image = ramp_3x3();
        // columns increase by 10: (30-10) + 2*(60-40) + (90-70)
        assert_eq!(SOBEL_X.weighted_sum(&image, 1, 1), 80);
        // rows increase by 30 downward, SOBEL_Y is positive at the top
        assert_eq!(SOBEL_Y.weighted_sum(&image, 1, 1), -240);
    }

    #[test]
    fn test_apply_truncates() {
        let image = GrayBuffer::from_rows(vec![vec![0, 0, 0], vec![0, 15, 0], vec![0, 0, 0]])
            .unwrap();
        // 15 * 4 / 16 = 3.75
        assert_eq!(GAUSSIAN_3X3.apply(&image, 1, 1), 3);
    }
}
