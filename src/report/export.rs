use serde::Serialize;

use crate::model::{BucketSizes, ExtensionBucket, FileEntry, SizePair, VariantCounts};
use crate::stats::Summary;

use super::ALL_EXTENSIONS;

/// Machine-readable form of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub file_count: usize,
    pub missing_minified: Vec<String>,
    pub files: Vec<FileRow>,
    pub extensions: Vec<ExtensionRow>,
    /// All extensions combined; `None` when nothing was processed
    pub total: Option<ExtensionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRow {
    pub name: String,
    pub unminified: Option<SizePair>,
    pub minified: Option<SizePair>,
    pub minification_size_ratio: Option<f64>,
    pub compression_size_ratio: Option<f64>,
    pub over_wire: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionRow {
    pub extension: String,
    pub count: VariantCounts,
    pub size: BucketSizes,
    pub minification_count_ratio: Option<f64>,
    pub minification_size_ratio: Option<f64>,
    pub compression_ratio: Option<f64>,
}

impl FileRow {
    fn new(entry: &FileEntry) -> Self {
        Self {
            name: entry.name.clone(),
            unminified: entry.unminified,
            minified: entry.minified,
            minification_size_ratio: entry.minification_size_ratio(),
            compression_size_ratio: entry.compression_size_ratio(),
            over_wire: entry.over_wire(),
        }
    }
}

impl ExtensionRow {
    fn new(extension: &str, stats: &ExtensionBucket) -> Self {
        Self {
            extension: extension.to_string(),
            count: stats.count,
            size: stats.size,
            minification_count_ratio: stats.minification_count_ratio(),
            minification_size_ratio: stats.minification_size_ratio(),
            compression_ratio: stats.compression_ratio(),
        }
    }
}

impl ExportReport {
    pub fn new(summary: Option<&Summary>) -> Self {
        let Some(summary) = summary else {
            return Self {
                file_count: 0,
                missing_minified: Vec::new(),
                files: Vec::new(),
                extensions: Vec::new(),
                total: None,
            };
        };

        Self {
            file_count: summary.file_count(),
            missing_minified: summary.missing_minified().map(|f| f.name.clone()).collect(),
            files: summary.files.iter().map(FileRow::new).collect(),
            extensions: summary
                .extensions
                .iter()
                .map(|e| ExtensionRow::new(&e.extension, &e.stats))
                .collect(),
            total: Some(ExtensionRow::new(ALL_EXTENSIONS, &summary.all)),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
