use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::Transform;

/// Run configuration, optionally loaded from a YAML file.
///
/// Every field has a default, and the defaults reproduce the plain
/// invocation: all four transforms, image plus text dump each, written to the
/// current directory.
///
/// ```yaml
/// output_dir: renders
/// write_text_dumps: false
/// transforms: [grayscale, halftone]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory the artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Write a comma-separated `.txt` dump next to every `.png`
    #[serde(default = "default_write_text_dumps")]
    pub write_text_dumps: bool,

    /// Transforms to produce (order and duplicates are ignored)
    #[serde(default = "default_transforms")]
    pub transforms: Vec<Transform>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_write_text_dumps() -> bool {
    true
}

fn default_transforms() -> Vec<Transform> {
    Transform::ALL.to_vec()
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            transforms = config.transforms.len(),
            output_dir = %config.output_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Configured transforms, de-duplicated and in pipeline order
    pub fn enabled_transforms(&self) -> Vec<Transform> {
        let mut transforms = self.transforms.clone();
        transforms.sort();
        transforms.dedup();
        transforms
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_text_dumps: default_write_text_dumps(),
            transforms: default_transforms(),
        }
    }
}
