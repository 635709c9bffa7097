mod bucket;
mod entry;

pub use bucket::{BucketSizes, ExtensionBucket, VariantCounts};
pub use entry::{FileEntry, SizePair, Variant};
