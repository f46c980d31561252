use std::borrow::Cow;

use raster_ops::{edge_map, floyd_steinberg, halftone, GrayBuffer};
use serde::Deserialize;

/// One output rendition of the grayscale image.
///
/// Variants are declared in pipeline order; sorting a list of transforms
/// puts them in the order they run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// The luminance buffer itself
    Grayscale,
    /// Blur followed by Sobel thresholding
    #[serde(rename = "edges")]
    #[value(name = "edges")]
    EdgeMap,
    /// 2x2 pattern halftone at double resolution
    Halftone,
    /// 16-level Floyd-Steinberg error diffusion
    FloydSteinberg,
}

impl Transform {
    /// All transforms, in pipeline order.
    pub const ALL: [Transform; 4] = [
        Transform::Grayscale,
        Transform::EdgeMap,
        Transform::Halftone,
        Transform::FloydSteinberg,
    ];

    /// File name prefix for this transform's artifacts.
    pub fn artifact_prefix(self) -> &'static str {
        match self {
            Transform::Grayscale => "Grayscale",
            Transform::EdgeMap => "Canny",
            Transform::Halftone => "Halftone",
            Transform::FloydSteinberg => "FloydSteinberg",
        }
    }

    /// Produce this transform's output from the grayscale buffer.
    pub fn apply(self, gray: &GrayBuffer) -> Cow<'_, GrayBuffer> {
        match self {
            Transform::Grayscale => Cow::Borrowed(gray),
            Transform::EdgeMap => Cow::Owned(edge_map(gray)),
            Transform::Halftone => Cow::Owned(halftone(gray)),
            Transform::FloydSteinberg => Cow::Owned(floyd_steinberg(gray)),
        }
    }
}
