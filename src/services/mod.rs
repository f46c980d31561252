pub mod pipeline;

pub use pipeline::{artifact_file_name, artifact_stem, Artifact, RasterPipeline, RunReport};
