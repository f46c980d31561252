use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphika::models::{AppConfig, Transform};
use graphika::services::RasterPipeline;

#[derive(Parser)]
#[command(name = "graphika")]
#[command(about = "Grayscale, edge map, halftone and Floyd-Steinberg renditions of an image")]
struct Cli {
    /// Input image (PNG, JPEG, GIF, BMP or TIFF)
    input: Option<PathBuf>,

    /// Directory to write artifacts to (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "GRAPHIKA_CONFIG")]
    config: Option<PathBuf>,

    /// Produce only these transforms (repeatable, overrides the config file)
    #[arg(long, value_enum)]
    only: Vec<Transform>,

    /// Skip the comma-separated text dumps
    #[arg(long)]
    no_dump: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphika=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let Some(input) = cli.input.clone() else {
        println!("Usage: graphika <image_filename>");
        return Ok(());
    };

    if !input.exists() {
        println!("Error: File '{}' not found.", input.display());
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let report = RasterPipeline::new(config)
        .run(&input)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    tracing::info!(artifacts = report.artifacts.len(), "Run complete");
    println!("Processing complete.");
    Ok(())
}

/// Config file (if any) with command line overrides applied
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if !cli.only.is_empty() {
        config.transforms = cli.only.clone();
    }
    if cli.no_dump {
        config.write_text_dumps = false;
    }
    Ok(config)
}
