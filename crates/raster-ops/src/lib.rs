//! raster-ops: grayscale, edge, halftone and dither transforms
//!
//! This library implements the pixel-matrix algorithms behind the `graphika`
//! tool. Every transform is a pure function from a borrowed [`Buffer2D`] to
//! a newly allocated one; nothing here performs I/O.
//!
//! # Quick Start
//!
//! ```
//! use raster_ops::{edge_map, floyd_steinberg, grayscale, halftone, Rgb, RgbBuffer};
//!
//! let image = RgbBuffer::new(4, 4, Rgb::new(128, 128, 128)).unwrap();
//! let gray = grayscale(&image);
//!
//! let edges = edge_map(&gray);
//! let screened = halftone(&gray);
//! let dithered = floyd_steinberg(&gray);
//!
//! assert_eq!((edges.width(), edges.height()), (4, 4));
//! assert_eq!((screened.width(), screened.height()), (8, 8));
//! assert_eq!((dithered.width(), dithered.height()), (4, 4));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RgbBuffer
//!     |
//!     v
//! grayscale()              (0.3 R + 0.59 G + 0.11 B, truncated)
//!     |
//!     +---> gaussian_blur() ---> detect_edges()   (W x H, border 0, {0, 255})
//!     |
//!     +---> halftone()                             (2W x 2H, {0, 255})
//!     |
//!     +---> floyd_steinberg()                      (W x H, 16-level steps)
//! ```
//!
//! The three branches only read the grayscale buffer and can run in any
//! order.
//!
//! # Numeric Policies
//!
//! Each stage has its own rounding rule and they are not interchangeable:
//!
//! | Stage | Rule |
//! |-------|------|
//! | [`grayscale`] | `f64` weighted sum, truncated |
//! | [`gaussian_blur`] | integer sum / 16, truncated toward zero |
//! | [`detect_edges`] | `sqrt(gx² + gy²) > 100`, strict |
//! | [`halftone`] | `sample * 4 / 255`, floor |
//! | [`floyd_steinberg`] | `value / 16` rounded half to even during the scan, clamp then truncate at the end |
//!
//! # Borders
//!
//! [`gaussian_blur`] and [`detect_edges`] only write interior cells and leave
//! the outermost rows and columns at 0. Buffers smaller than 3x3 have no
//! interior and come back all zero.

pub mod buffer;
pub mod color;
pub mod dither;
pub mod filter;
pub mod halftone;


pub use buffer::{Buffer2D, BufferError, GrayBuffer, RgbBuffer};
pub use color::{grayscale, to_gray, Rgb};
pub use dither::{floyd_steinberg, quantize, DiffusionKernel, FLOYD_STEINBERG, QUANT_STEP};
pub use filter::{
    detect_edges, edge_map, gaussian_blur, Kernel3, EDGE_THRESHOLD, EDGE_VALUE, GAUSSIAN_3X3,
    SOBEL_X, SOBEL_Y,
};
pub use halftone::{halftone, quantization_level, HalftonePattern, HALFTONE_PATTERNS};
