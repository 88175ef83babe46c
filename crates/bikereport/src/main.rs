//! bikereport - Main Entry Point

mod narrative;
mod report;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

use bikereport_config::{ConfigLoader, ReportSettings};
use bikereport_data::{DatasetCache, DatasetOrigin, SourceSpec};
use report::ReportGenerator;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input CSV path, tried before the configured candidates
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Directory to write the report and charts to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Read an uploaded CSV table from standard input
    #[arg(long)]
    stdin: bool,

    /// Log level override
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(&args)?;

    bikereport_common::init_logging(settings.logging.to_logging_config())
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    if let Some(data) = &args.data {
        settings.data.source_candidates.insert(0, data.clone());
    }
    if let Some(output_dir) = &args.output_dir {
        settings.graph.output_dir = output_dir.clone();
    }

    let uploaded = if args.stdin {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read uploaded table from stdin")?;
        Some(bytes)
    } else {
        None
    };

    let spec = SourceSpec {
        candidates: settings.data.source_candidates.clone(),
        uploaded,
        allow_synthetic_fallback: settings.data.allow_synthetic_fallback,
    };

    let cache = DatasetCache::new();
    let dataset = cache.get_or_load(&spec).context("Failed to load dataset")?;

    match &dataset.origin {
        DatasetOrigin::Candidate(path) => info!(path = %path.display(), "Using candidate dataset"),
        DatasetOrigin::Uploaded => info!("Using uploaded dataset"),
        DatasetOrigin::Synthetic => warn!("Using built-in sample dataset"),
        DatasetOrigin::Exhausted => warn!("No dataset source was usable"),
    }

    let report_path = ReportGenerator::new(&settings)
        .generate(&dataset)
        .context("Report generation halted")?;

    info!(path = %report_path.display(), "Report generation complete");
    println!("Report written to {}", report_path.display());

    Ok(())
}

fn load_settings(args: &Args) -> Result<ReportSettings> {
    let mut settings = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
    }

    Ok(settings)
}
