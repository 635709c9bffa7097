// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use sizestat::model::SizePair;
use sizestat::stats::{Aggregator, DEFAULT_MINIFIED_PATTERN, MinifiedMarker};

const EXTENSIONS: [&str; 5] = ["js", "css", "html", "svg", "json"];

/// Generate file names, every other logical file also shipped minified
pub fn generate_paths(num_files: usize) -> Vec<String> {
    let mut paths = Vec::with_capacity(num_files * 2);
    for i in 0..num_files {
        let ext = EXTENSIONS[i % EXTENSIONS.len()];
        let dir = format!("dir_{}", i / 100);
        paths.push(format!("{}/file_{}.{}", dir, i, ext));
        if i % 2 == 0 {
            paths.push(format!("{}/file_{}.min.{}", dir, i, ext));
        }
    }
    paths
}

/// Build an aggregator with `num_files` logical files recorded
pub fn generate_aggregator(num_files: usize) -> Aggregator {
    let mut agg = Aggregator::new(MinifiedMarker::new(DEFAULT_MINIFIED_PATTERN).unwrap());
    for (i, path) in generate_paths(num_files).iter().enumerate() {
        let size = (i as u64 + 1) * 100;
        agg.record(path, SizePair::new(size, size / 4));
    }
    agg
}

/// Generate compressible text content of roughly `len` bytes
pub fn generate_content(len: usize) -> Vec<u8> {
    let line = b"function add(a, b) { return a + b; } // padding padding\n";
    line.iter().copied().cycle().take(len).collect()
}
