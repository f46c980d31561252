//! RGB samples and luminance conversion.
//!
//! - [`Rgb`]: one decoded color sample, three 8-bit channels
//! - [`grayscale`]: maps an [`RgbBuffer`](crate::RgbBuffer) to a
//!   [`GrayBuffer`](crate::GrayBuffer) with truncating luminance weights

mod grayscale;
mod rgb;

pub use grayscale::{grayscale, to_gray};
pub use rgb::Rgb;
