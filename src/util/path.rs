/// Extracts the extension bucket key from a normalized file name.
///
/// The key is everything after the last `.`, lowercased. A name without
/// any `.` is its own key; there is no separate "no extension" bucket.
pub fn extension_key(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => file_name.to_lowercase(),
    }
}

/// Joins path components with `/`, regardless of the host separator.
pub fn to_slash_path(path: &std::path::Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
