// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use sizestat::model::SizePair;
use sizestat::stats::{Aggregator, DEFAULT_MINIFIED_PATTERN, MinifiedMarker};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an aggregator with the default `.min` marker
pub fn default_aggregator() -> Aggregator {
    Aggregator::new(MinifiedMarker::new(DEFAULT_MINIFIED_PATTERN).unwrap())
}

/// Record precomputed sizes: (path, size, gzip_size)
pub fn record_all(agg: &mut Aggregator, files: &[(&str, u64, u64)]) {
    for (path, size, gzip) in files {
        agg.record(path, SizePair::new(*size, *gzip));
    }
}

/// Create a temporary build output directory containing the given files
pub fn create_build_dir(files: &[(&str, &[u8])]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
    }

    (dir, root)
}
