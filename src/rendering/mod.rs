//! Image codec and matrix text dump.
//!
//! These are the I/O edges of the pipeline: decoding the input into an
//! [`RgbBuffer`](raster_ops::RgbBuffer) and writing single-channel results
//! back out as 8-bit grayscale PNGs and comma-separated text.

pub mod codec;
pub mod text_dump;

pub use codec::{decode_rgb, encode_gray_png, gray_png_bytes};
pub use text_dump::{format_matrix, write_matrix};
