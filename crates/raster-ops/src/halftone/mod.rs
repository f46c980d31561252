//! Pattern halftoning.
//!
//! Each input sample becomes a 2x2 block of binary output samples, so a
//! `W x H` input yields a `2W x 2H` output.

mod pattern;
mod synthesize;

pub use pattern::{quantization_level, HalftonePattern, HALFTONE_PATTERNS, PATTERN_ON};
pub use synthesize::halftone;
