use std::path::PathBuf;

use raster_ops::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {0}")]
    Dimensions(#[from] BufferError),

    #[error("Image too large for PNG: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Failed to write matrix dump {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Dump error: {0}")]
    Dump(#[from] DumpError),

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
