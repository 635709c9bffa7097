use serde::Serialize;

use crate::util::ratio;

/// Which representation of a logical file a record carries
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    Unminified,
    Minified,
}

impl Variant {
    pub fn from_minified(minified: bool) -> Self {
        if minified { Variant::Minified } else { Variant::Unminified }
    }
}

/// Raw and gzip-compressed size of one representation
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct SizePair {
    pub size: u64,
    pub gzip_size: u64,
}

impl SizePair {
    pub fn new(size: u64, gzip_size: u64) -> Self {
        Self { size, gzip_size }
    }
}

/// A logical file: the unminified and/or minified representation
/// recorded under one normalized name.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub unminified: Option<SizePair>,
    pub minified: Option<SizePair>,
}

impl FileEntry {
    /// Create an entry from its first sighting, so at least one variant is always set
    pub fn new(name: &str, variant: Variant, sizes: SizePair) -> Self {
        let mut entry = Self {
            name: name.to_string(),
            unminified: None,
            minified: None,
        };
        entry.set(variant, sizes);
        entry
    }

    /// Record a variant, replacing any previous value for it (last write wins)
    pub fn set(&mut self, variant: Variant, sizes: SizePair) {
        match variant {
            Variant::Unminified => self.unminified = Some(sizes),
            Variant::Minified => self.minified = Some(sizes),
        }
    }

    pub fn has_both(&self) -> bool {
        self.unminified.is_some() && self.minified.is_some()
    }

    /// The larger representation: unminified if present, else minified
    pub fn src(&self) -> SizePair {
        match (self.unminified, self.minified) {
            (Some(unminified), _) => unminified,
            (None, Some(minified)) => minified,
            (None, None) => SizePair::default(),
        }
    }

    /// The representation that ships: minified if present, else unminified
    pub fn dist(&self) -> SizePair {
        match (self.minified, self.unminified) {
            (Some(minified), _) => minified,
            (None, Some(unminified)) => unminified,
            (None, None) => SizePair::default(),
        }
    }

    /// Bytes sent over the wire for the shipped representation
    pub fn over_wire(&self) -> u64 {
        self.dist().gzip_size
    }

    /// minified / unminified, only when both representations exist
    pub fn minification_size_ratio(&self) -> Option<f64> {
        match (self.unminified, self.minified) {
            (Some(unminified), Some(minified)) => ratio(minified.size, unminified.size),
            _ => None,
        }
    }

    /// gzip size of the shipped representation over the size of the source one
    pub fn compression_size_ratio(&self) -> Option<f64> {
        ratio(self.dist().gzip_size, self.src().size)
    }
}
