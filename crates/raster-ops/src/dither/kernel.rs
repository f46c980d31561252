//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at `(row + dy, col + dx)`
/// receives `error * weight / divisor`. Entries only point at cells the
/// raster scan has not reached yet (`dy > 0`, or `dy == 0` with `dx > 0`).
#[derive(Debug, Clone, Copy)]
pub struct DiffusionKernel {
    /// (dx, dy, weight) entries, applied in order.
    pub entries: &'static [(isize, usize, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg kernel, 100% error propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
