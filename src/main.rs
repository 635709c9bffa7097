use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, Write};

use sizestat::cli::Cli;
use sizestat::config::Options;
use sizestat::report::{ExportReport, write_report};
use sizestat::source::{DirectorySource, VerboseProgress};
use sizestat::stats::Aggregator;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    }
    .with_overrides(cli.minified_name.clone(), cli.verbose);

    let default_filter = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    info!("Minified name pattern: {}", options.minified_name);

    let mut aggregator = Aggregator::from_options(&options)?;
    let source = DirectorySource::new(&cli.paths);
    source.ingest_into(&mut aggregator, &VerboseProgress::new(options.verbose))?;

    let summary = aggregator.summarize();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let json = ExportReport::new(summary.as_ref())
            .to_json()
            .context("Failed to serialize report")?;
        writeln!(out, "{}", json)?;
    } else {
        write_report(&mut out, summary.as_ref())?;
    }
    out.flush()?;

    Ok(())
}
