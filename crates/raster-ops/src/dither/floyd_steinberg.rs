//! Floyd-Steinberg error diffusion dithering.

use super::{DiffusionKernel, FLOYD_STEINBERG};
use crate::buffer::{Buffer2D, GrayBuffer};

/// Spacing between quantization centers: 0, 16, 32, ..., 256.
pub const QUANT_STEP: f64 = 16.0;

/// Snap `value` to the nearest multiple of [`QUANT_STEP`].
///
/// Ties round to the even multiple (`8 -> 0`, `24 -> 32`, `40 -> 32`).
/// Values near the top snap to 256, which is only clamped to 255 after the
/// whole scan.
#[inline]
pub fn quantize(value: f64) -> f64 {
    (value / QUANT_STEP).round_ties_even() * QUANT_STEP
}

/// Dither a single-channel buffer to 16-level steps with Floyd-Steinberg
/// error diffusion.
///
/// The scan runs over a private `f64` working copy of `image`. Cells may go
/// fractional, negative or above 255 while error accumulates; only after the
/// scan completes is every cell clamped to `0..=255` and truncated.
///
/// # Algorithm
///
/// For each cell in row-major order:
///
/// 1. `new = quantize(old)` is stored in place
/// 2. `error = old - new`
/// 3. `error * weight / 16` is added to each in-bounds [`FLOYD_STEINBERG`]
///    neighbor
pub fn floyd_steinberg(image: &GrayBuffer) -> GrayBuffer {
    let mut working: Buffer2D<f64> = image.map(|&v| f64::from(v));

    for row in 0..working.height() {
        for col in 0..working.width() {
            let old = working[(row, col)];
            let new = quantize(old);
            working[(row, col)] = new;
            diffuse(&mut working, row, col, old - new, &FLOYD_STEINBERG);
        }
    }

    working.map(|&v| clamp_to_u8(v))
}

/// Add `error`'s kernel share to each neighbor of `(row, col)` that lies
/// inside the buffer. No clamping.
#[inline]
fn diffuse(
    working: &mut Buffer2D<f64>,
    row: usize,
    col: usize,
    error: f64,
    kernel: &DiffusionKernel,
) {
    let divisor = f64::from(kernel.divisor);
    for &(dx, dy, weight) in kernel.entries {
        let Some(x) = col.checked_add_signed(dx) else {
            continue;
        };
        let y = row + dy;
        if x < working.width() && y < working.height() {
            working[(y, x)] += error * f64::from(weight) / divisor;
        }
    }
}

/// Values above 255 become 255, below 0 become 0, the rest truncate.
#[inline]
fn clamp_to_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
