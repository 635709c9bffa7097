//! File input for the aggregator
//!
//! - **record**: The `FileRecord` handed to the aggregator
//! - **walker**: Directory listing and lazy file loading (walkdir)
//! - **progress**: Progress reporting abstraction

mod progress;
mod record;
mod walker;

pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter, VerboseProgress};
pub use record::FileRecord;
pub use walker::{SourceEntry, list_entries};

use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use crate::stats::Aggregator;

/// Counts of what one ingest pass saw
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct IngestCounts {
    pub measured: u64,
    pub skipped: u64,
}

/// Streams files from one or more roots into an aggregator
pub struct DirectorySource {
    roots: Vec<PathBuf>,
}

impl DirectorySource {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// All entries under every root, in root order then file-name order
    pub fn entries(&self) -> Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for root in &self.roots {
            entries.extend(list_entries(root)?);
        }
        Ok(entries)
    }

    /// Feed every entry into `aggregator`, one file at a time.
    ///
    /// Stops at the first read or gzip failure.
    pub fn ingest_into(
        &self,
        aggregator: &mut Aggregator,
        progress: &dyn ProgressReporter,
    ) -> Result<IngestCounts> {
        let start = Instant::now();
        let entries = self.entries()?;
        info!("Found {} entries under {} root(s)", entries.len(), self.roots.len());

        let pb = progress.start("Measuring", entries.len() as u64);
        let mut counts = IngestCounts::default();

        for entry in &entries {
            pb.set_message(&entry.name);
            let record = entry.load()?;
            match aggregator.ingest(&record)? {
                Some(_) => counts.measured += 1,
                None => counts.skipped += 1,
            }
            pb.inc(1);
        }

        pb.finish();
        info!(
            "Measured {} files ({} skipped) in {:?}",
            counts.measured,
            counts.skipped,
            start.elapsed()
        );
        Ok(counts)
    }
}
