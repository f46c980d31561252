//! Luminance conversion.

use super::Rgb;
use crate::buffer::{GrayBuffer, RgbBuffer};

const RED_WEIGHT: f64 = 0.3;
const GREEN_WEIGHT: f64 = 0.59;
const BLUE_WEIGHT: f64 = 0.11;

/// Luminance of a single sample: `floor(0.3*R + 0.59*G + 0.11*B)`.
///
/// The sum is evaluated in `f64`, left to right, and truncated rather than
/// rounded. The evaluation order is part of the contract: for some inputs
/// (e.g. `(0, 55, 5)`) the floating-point sum lands just below an integer
/// and the truncated result differs from exact rational arithmetic.
///
/// ```
/// use raster_ops::{to_gray, Rgb};
///
/// assert_eq!(to_gray(Rgb::new(100, 150, 200)), 140); // 140.5 truncated
/// ```
#[inline]
pub fn to_gray(pixel: Rgb) -> u8 {
    let luminance = RED_WEIGHT * f64::from(pixel.r)
        + GREEN_WEIGHT * f64::from(pixel.g)
        + BLUE_WEIGHT * f64::from(pixel.b);
    // weights sum to 1.0, so the result never exceeds 255
    luminance as u8
}

/// Convert an RGB buffer to a single-channel luminance buffer of the same
/// dimensions.
pub fn grayscale(image: &RgbBuffer) -> GrayBuffer {
    image.map(|&pixel| to_gray(pixel))
}
