//! Report Export - command-line entry point
//!
//! Reads a dataset JSON file, encodes it as CSV or PDF and writes the
//! artifact into a directory.

mod cli;
mod config;
mod sink;

use anyhow::{Context, Result};
use clap::Parser;
use report_export::{export, ArtifactSink, ExportFormat, ShapePolicy};
use report_model::ReportDataset;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use sink::DirectorySink;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("Export failed: {:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut options = config::load_options(cli.options.as_deref())?;
    if cli.lenient {
        options.shape_policy = ShapePolicy::Lenient;
    }

    let json = std::fs::read_to_string(&cli.dataset)
        .with_context(|| format!("Failed to read dataset {}", cli.dataset.display()))?;
    let dataset = ReportDataset::from_json(&json)
        .with_context(|| format!("Invalid dataset {}", cli.dataset.display()))?;

    let format = ExportFormat::from(cli.format);
    tracing::info!(
        report_type = %dataset.report_type,
        rows = dataset.row_count(),
        format = %format,
        "Exporting report"
    );

    let artifact = export(&dataset, format, &options).context("Failed to encode report")?;
    let mut sink = DirectorySink::new(&cli.out);
    sink.deliver(&artifact)
        .with_context(|| format!("Failed to write {}", artifact.filename))?;

    for path in sink.written() {
        println!("{}", path.display());
    }
    Ok(())
}
