use serde::Serialize;

use crate::util::ratio;

use super::FileEntry;

/// Mutually exclusive classification of files in a bucket
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct VariantCounts {
    pub minified: u64,
    pub unminified: u64,
    pub both: u64,
}

impl VariantCounts {
    pub fn total(&self) -> u64 {
        self.minified + self.unminified + self.both
    }
}

/// Byte totals of a bucket.
///
/// `src` sums the larger (or only) representation of each file, `dist` the
/// shipped one, and `gzip` the compressed size of whatever fed `dist`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct BucketSizes {
    pub minified: u64,
    pub unminified: u64,
    pub src: u64,
    pub dist: u64,
    pub gzip: u64,
}

/// Statistics aggregated by file extension
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ExtensionBucket {
    pub count: VariantCounts,
    pub size: BucketSizes,
}

impl ExtensionBucket {
    /// Fold one file into this bucket
    pub fn add(&mut self, entry: &FileEntry) {
        match (entry.unminified, entry.minified) {
            (Some(_), Some(_)) => self.count.both += 1,
            (Some(_), None) => self.count.unminified += 1,
            (None, Some(_)) => self.count.minified += 1,
            (None, None) => return,
        }

        self.size.unminified += entry.unminified.map_or(0, |s| s.size);
        self.size.minified += entry.minified.map_or(0, |s| s.size);

        let src = entry.src();
        let dist = entry.dist();
        self.size.src += src.size;
        self.size.dist += dist.size;
        self.size.gzip += dist.gzip_size;
    }

    pub fn file_count(&self) -> u64 {
        self.count.total()
    }

    /// Share of files that have a minified representation
    pub fn minification_count_ratio(&self) -> Option<f64> {
        ratio(self.count.minified + self.count.both, self.count.total())
    }

    /// dist / src
    pub fn minification_size_ratio(&self) -> Option<f64> {
        ratio(self.size.dist, self.size.src)
    }

    /// gzip / src
    pub fn compression_ratio(&self) -> Option<f64> {
        ratio(self.size.gzip, self.size.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SizePair, Variant};

    #[test]
    fn test_add_pair() {
        let mut entry = FileEntry::new("app.css", Variant::Unminified, SizePair::new(500, 100));
        entry.set(Variant::Minified, SizePair::new(400, 90));

        let mut bucket = ExtensionBucket::default();
        bucket.add(&entry);

        assert_eq!(bucket.count, VariantCounts { minified: 0, unminified: 0, both: 1 });
        assert_eq!(
            bucket.size,
            BucketSizes { minified: 400, unminified: 500, src: 500, dist: 400, gzip: 90 }
        );
        assert_eq!(bucket.minification_count_ratio(), Some(1.0));
        assert_eq!(bucket.minification_size_ratio(), Some(0.8));
        assert_eq!(bucket.compression_ratio(), Some(0.18));
    }

    #[test]
    fn test_add_single_variants() {
        let mut bucket = ExtensionBucket::default();
        bucket.add(&FileEntry::new("a.js", Variant::Unminified, SizePair::new(1000, 300)));
        bucket.add(&FileEntry::new("b.js", Variant::Minified, SizePair::new(200, 80)));

        assert_eq!(bucket.count, VariantCounts { minified: 1, unminified: 1, both: 0 });
        assert_eq!(bucket.size.unminified, 1000);
        assert_eq!(bucket.size.minified, 200);
        assert_eq!(bucket.size.src, 1200);
        assert_eq!(bucket.size.dist, 1200);
        assert_eq!(bucket.size.gzip, 380);
        assert_eq!(bucket.minification_count_ratio(), Some(0.5));
        assert_eq!(bucket.file_count(), 2);
    }

    #[test]
    fn test_empty_bucket_ratios() {
        let bucket = ExtensionBucket::default();
        assert_eq!(bucket.file_count(), 0);
        assert_eq!(bucket.minification_count_ratio(), None);
        assert_eq!(bucket.minification_size_ratio(), None);
        assert_eq!(bucket.compression_ratio(), None);
    }
}
