use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::stats::DEFAULT_MINIFIED_PATTERN;

/// Report options.
///
/// Read from JSON (`minifiedName`, `verbose`); unknown keys are ignored and
/// missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Regex matching the minified marker in a file name
    pub minified_name: String,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            minified_name: DEFAULT_MINIFIED_PATTERN.to_string(),
            verbose: false,
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid options JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read config: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Could not parse config: {}", path.display()))
    }

    /// Apply command-line values on top of these options; `None` keeps the current value
    pub fn with_overrides(mut self, minified_name: Option<String>, verbose: Option<bool>) -> Self {
        if let Some(pattern) = minified_name {
            self.minified_name = pattern;
        }
        if let Some(verbose) = verbose {
            self.verbose = verbose;
        }
        self
    }
}
