//! Floyd-Steinberg error diffusion to 16-level steps.
//!
//! Every sample is quantized to the nearest multiple of [`QUANT_STEP`] and
//! the quantization error is pushed onto neighbors that have not been
//! visited yet. Because each cell's result depends on the error accumulated
//! from all earlier cells, the scan is strictly sequential: row-major, left
//! to right, top to bottom.
//!
//! # Example
//!
//! ```
//! use raster_ops::{floyd_steinberg, GrayBuffer};
//!
//! let image = GrayBuffer::new(4, 4, 128).unwrap();
//! let dithered = floyd_steinberg(&image);
//!
//! // 128 is already a multiple of 16, so there is no error to diffuse
//! assert!(dithered.as_slice().iter().all(|&v| v == 128));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::{floyd_steinberg, quantize, QUANT_STEP};
pub use kernel::{DiffusionKernel, FLOYD_STEINBERG};
