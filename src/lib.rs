//! Graphika - raster renditions of a single image
//!
//! Decodes an input image, converts it to grayscale and writes an edge map,
//! a 2x2 halftone and a Floyd-Steinberg dither next to it as grayscale PNGs
//! with matching comma-separated text dumps. The pixel algorithms live in
//! the `raster-ops` crate; this library holds the file I/O, configuration
//! and orchestration, exposed for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
