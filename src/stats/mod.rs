//! Size statistics aggregation
//!
//! Records every file under its normalized name, then rolls the
//! per-file sizes up into per-extension buckets.
//!
//! # Architecture
//!
//! - **marker**: Minified-name detection (`app.min.css` -> `app.css`)
//! - **gzip**: Compressed size measurement
//! - **Aggregator**: Per-run owner of the file map; produces a [`Summary`]

mod gzip;
mod marker;

pub use gzip::gzip_size;
pub use marker::{DEFAULT_MINIFIED_PATTERN, MinifiedMarker, MinifiedRule, Normalized};

use anyhow::{Context, Result};
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::config::Options;
use crate::model::{ExtensionBucket, FileEntry, SizePair, Variant};
use crate::source::FileRecord;
use crate::util::extension_key;

/// Collects size statistics for one report run
pub struct Aggregator {
    rule: Box<dyn MinifiedRule>,
    files: FxHashMap<String, FileEntry>,
}

impl Aggregator {
    pub fn new(rule: impl MinifiedRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
            files: FxHashMap::default(),
        }
    }

    /// Create an aggregator using the configured minified name pattern
    pub fn from_options(options: &Options) -> Result<Self> {
        Ok(Self::new(MinifiedMarker::new(&options.minified_name)?))
    }

    /// Measure and record one file.
    ///
    /// Records without contents are skipped and leave the statistics untouched.
    pub fn ingest(&mut self, record: &FileRecord) -> Result<Option<&FileEntry>> {
        let Some(contents) = record.contents.as_deref() else {
            debug!("Skipping {} (no contents)", record.path);
            return Ok(None);
        };

        let gzip = gzip_size(contents)
            .with_context(|| format!("Failed to compute gzip size of {}", record.path))?;
        let sizes = SizePair::new(contents.len() as u64, gzip);

        Ok(Some(self.record(&record.path, sizes)))
    }

    /// Record precomputed sizes for a path, classifying it by its name
    pub fn record(&mut self, path: &str, sizes: SizePair) -> &FileEntry {
        let Normalized { name, minified } = self.rule.normalize(path);
        let variant = Variant::from_minified(minified);
        debug!(
            "{} -> {} ({:?}, {} B, gzip {} B)",
            path, name, variant, sizes.size, sizes.gzip_size
        );
        self.record_variant(name, variant, sizes)
    }

    /// Record sizes for an already normalized name.
    ///
    /// A second record of the same variant replaces the first.
    pub fn record_variant(&mut self, name: String, variant: Variant, sizes: SizePair) -> &FileEntry {
        match self.files.entry(name) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                entry.set(variant, sizes);
                entry
            }
            Entry::Vacant(vacant) => {
                let entry = FileEntry::new(vacant.key(), variant, sizes);
                vacant.insert(entry)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.files.get(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Roll the recorded files up by extension.
    ///
    /// Returns `None` when nothing was recorded. Buckets are rebuilt from
    /// scratch on every call.
    pub fn summarize(&self) -> Option<Summary> {
        if self.files.is_empty() {
            return None;
        }

        let mut files: Vec<FileEntry> = self.files.values().cloned().collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let mut buckets: FxHashMap<String, ExtensionBucket> = FxHashMap::default();
        let mut all = ExtensionBucket::default();

        for entry in &files {
            buckets.entry(extension_key(&entry.name)).or_default().add(entry);
            all.add(entry);
        }

        let mut extensions: Vec<_> = buckets
            .into_iter()
            .map(|(extension, stats)| ExtensionSummary { extension, stats })
            .collect();
        extensions.sort_by(|a, b| a.extension.cmp(&b.extension));

        Some(Summary { files, extensions, all })
    }
}

/// One extension bucket, keyed for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSummary {
    pub extension: String,
    pub stats: ExtensionBucket,
}

/// Finalized statistics of a run, sorted for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Files sorted by normalized name
    pub files: Vec<FileEntry>,
    /// Real extensions sorted by key
    pub extensions: Vec<ExtensionSummary>,
    /// All extensions combined
    pub all: ExtensionBucket,
}

impl Summary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Files that were only seen unminified
    pub fn missing_minified(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter().filter(|f| f.minified.is_none())
    }

    pub fn extension(&self, extension: &str) -> Option<&ExtensionBucket> {
        self.extensions
            .iter()
            .find(|e| e.extension == extension)
            .map(|e| &e.stats)
    }
}
