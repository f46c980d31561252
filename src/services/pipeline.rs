use std::path::{Path, PathBuf};
use std::time::Instant;

use raster_ops::{grayscale, GrayBuffer};

use crate::error::PipelineError;
use crate::models::{AppConfig, Transform};
use crate::rendering::{decode_rgb, encode_gray_png, write_matrix};

/// One written output of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub transform: Transform,
    /// Path of the grayscale PNG
    pub image_path: PathBuf,
    /// Path of the comma-separated dump, when dumps are enabled
    pub dump_path: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
}

/// Everything a run produced, in pipeline order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub artifacts: Vec<Artifact>,
}

impl RunReport {
    /// Artifact produced by `transform`, if it was enabled
    pub fn artifact(&self, transform: Transform) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.transform == transform)
    }
}

/// Pipeline that orchestrates decode → grayscale → transforms → files
pub struct RasterPipeline {
    config: AppConfig,
}

impl RasterPipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Process one input image and write every enabled artifact.
    ///
    /// The grayscale buffer is computed once and shared read-only by all
    /// transforms. Artifacts already written stay on disk if a later step
    /// fails.
    pub fn run(&self, input: &Path) -> Result<RunReport, PipelineError> {
        let started = Instant::now();
        let rgb = decode_rgb(input)?;

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|source| {
            PipelineError::CreateOutputDir {
                path: output_dir.clone(),
                source,
            }
        })?;

        let gray = grayscale(&rgb);
        let stem = artifact_stem(input);
        let mut report = RunReport::default();

        for transform in self.config.enabled_transforms() {
            let step_started = Instant::now();
            let output = transform.apply(&gray);
            let output: &GrayBuffer = &output;

            let image_path = output_dir.join(artifact_file_name(transform, &stem, "png"));
            encode_gray_png(&output, &image_path)?;

            let dump_path = if self.config.write_text_dumps {
                let path = output_dir.join(artifact_file_name(transform, &stem, "txt"));
                write_matrix(&output, &path)?;
                Some(path)
            } else {
                None
            };

            tracing::info!(
                transform = transform.artifact_prefix(),
                path = %image_path.display(),
                width = output.width(),
                height = output.height(),
                "Wrote artifact"
            );
            tracing::debug!(
                transform = transform.artifact_prefix(),
                elapsed_ms = step_started.elapsed().as_millis() as u64,
                "Transform finished"
            );

            report.artifacts.push(Artifact {
                transform,
                image_path,
                dump_path,
                width: output.width(),
                height: output.height(),
            });
        }

        tracing::debug!(
            path = %input.display(),
            artifacts = report.artifacts.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Pipeline finished"
        );
        Ok(report)
    }
}

/// Base name shared by all artifacts of `input`: the file name with its last
/// extension removed, or `image` when there is none to use.
pub fn artifact_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

/// `<Prefix>_<stem>.<extension>`
pub fn artifact_file_name(transform: Transform, stem: &str, extension: &str) -> String {
    format!("{}_{}.{}", transform.artifact_prefix(), stem, extension)
}
