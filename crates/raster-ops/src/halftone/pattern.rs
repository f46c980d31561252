//! The fixed 5-level pattern table.

/// A 2x2 binary mask, indexed `[dy][dx]`. 1 means "on".
pub type HalftonePattern = [[u8; 2]; 2];

/// Output value written for a mask entry of 1. Mask entries of 0 write 0.
pub const PATTERN_ON: u8 = 255;

/// Patterns indexed by [`quantization_level`], darkest first.
///
/// ```text
///  level 0   level 1   level 2   level 3   level 4
///   . #       # .       # #       # #       # #
///   # .       . #       . #       # .       # #
/// ```
pub const HALFTONE_PATTERNS: [HalftonePattern; 5] = [
    [[0, 1], [1, 0]],
    [[1, 0], [0, 1]],
    [[1, 1], [0, 1]],
    [[1, 1], [1, 0]],
    [[1, 1], [1, 1]],
];

/// Pattern index for a sample: `(sample * 4) / 255`, floor division.
///
/// Only 255 reaches level 4.
#[inline]
pub fn quantization_level(sample: u8) -> usize {
    usize::from(sample) * 4 / 255
}
