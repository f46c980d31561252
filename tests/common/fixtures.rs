//! Test fixtures: input images and their known outputs.

use std::path::{Path, PathBuf};

/// Gradient fixture size
pub const GRADIENT_WIDTH: u32 = 5;
pub const GRADIENT_HEIGHT: u32 = 4;

/// Write a 5x4 RGB gradient, pixel `(x, y)` = `(60x, 80y, 30)`, as PNG
pub fn write_gradient(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    image::RgbImage::from_fn(GRADIENT_WIDTH, GRADIENT_HEIGHT, |x, y| {
        image::Rgb([(x * 60) as u8, (y * 80) as u8, 30])
    })
    .save_with_format(&path, image::ImageFormat::Png)
    .unwrap();
    path
}

/// Write a single-color RGB image as PNG
pub fn write_flat(dir: &Path, file_name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(file_name);
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Expected outputs for [`write_gradient`]
pub mod gradient {
    pub const GRAYSCALE: [[u8; 5]; 4] = [
        [3, 21, 39, 57, 75],
        [50, 68, 86, 104, 122],
        [97, 115, 133, 151, 169],
        [144, 162, 180, 198, 216],
    ];

    pub const EDGES: [[u8; 5]; 4] = [
        [0, 0, 0, 0, 0],
        [0, 255, 255, 255, 0],
        [0, 255, 255, 255, 0],
        [0, 0, 0, 0, 0],
    ];

    pub const HALFTONE: [[u8; 10]; 8] = [
        [0, 255, 0, 255, 0, 255, 0, 255, 255, 0],
        [255, 0, 255, 0, 255, 0, 255, 0, 0, 255],
        [0, 255, 255, 0, 255, 0, 255, 0, 255, 0],
        [255, 0, 0, 255, 0, 255, 0, 255, 0, 255],
        [255, 0, 255, 0, 255, 255, 255, 255, 255, 255],
        [0, 255, 0, 255, 0, 255, 0, 255, 0, 255],
        [255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
        [0, 255, 0, 255, 0, 255, 255, 0, 255, 0],
    ];

    pub const FLOYD_STEINBERG: [[u8; 5]; 4] = [
        [0, 16, 48, 48, 80],
        [48, 64, 96, 96, 128],
        [96, 112, 128, 160, 160],
        [144, 160, 192, 192, 224],
    ];
}

/// Names of the eight artifacts written for `stem` with default settings
pub fn default_artifact_names(stem: &str) -> Vec<String> {
    let mut names: Vec<String> = ["Grayscale", "Canny", "Halftone", "FloydSteinberg"]
        .iter()
        .flat_map(|prefix| {
            [
                format!("{prefix}_{stem}.png"),
                format!("{prefix}_{stem}.txt"),
            ]
        })
        .collect();
    names.sort();
    names
}
