/// A file flowing through the pipeline.
///
/// `contents` is `None` for entries without data (directories, special
/// files); those pass through without being measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Relative, `/`-separated path
    pub path: String,
    pub contents: Option<Vec<u8>>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            contents: Some(contents),
        }
    }

    pub fn empty(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: None,
        }
    }
}
