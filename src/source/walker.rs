use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::util::to_slash_path;

use super::FileRecord;

/// A filesystem entry discovered under one of the roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Location on disk
    pub path: PathBuf,
    /// Name relative to the root it was found under
    pub name: String,
    pub is_file: bool,
}

impl SourceEntry {
    /// Read the entry into a record; non-files become content-less records
    pub fn load(&self) -> Result<FileRecord> {
        if !self.is_file {
            return Ok(FileRecord::empty(self.name.clone()));
        }
        let contents = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(FileRecord::new(self.name.clone(), contents))
    }
}

/// Dot-prefixed names (`.git`, `.cache`) below a root
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// List every entry under `root` in file-name order.
///
/// Symlinks are followed, hidden entries and everything below them are
/// skipped. A root that is itself a file yields a single entry named after it.
pub fn list_entries(root: &Path) -> Result<Vec<SourceEntry>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Could not access {}", root.display()))?;

    if !metadata.is_dir() {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| to_slash_path(root));
        return Ok(vec![SourceEntry {
            path: root.to_path_buf(),
            name,
            is_file: metadata.is_file(),
        }]);
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        entries.push(SourceEntry {
            name: to_slash_path(relative),
            is_file: entry.file_type().is_file(),
            path: entry.into_path(),
        });
    }
    Ok(entries)
}
