//! Minified-name detection
//!
//! Maps `app.min.css` and `app.css` onto the same logical name.

use anyhow::{Context, Result};
use regex::Regex;

/// Default marker: a `.min` infix or suffix (`app.min.js`, `app.min`)
pub const DEFAULT_MINIFIED_PATTERN: &str = r"\.min\b";

/// A file name with the minified marker stripped
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Normalized {
    pub name: String,
    pub minified: bool,
}

/// Rule deciding whether a file name denotes a minified file
pub trait MinifiedRule {
    fn normalize(&self, name: &str) -> Normalized;
}

/// Regex-based rule; every match of the pattern is removed from the name
#[derive(Debug, Clone)]
pub struct MinifiedMarker {
    pattern: Regex,
}

impl MinifiedMarker {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid minified name pattern: {}", pattern))?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl MinifiedRule for MinifiedMarker {
    fn normalize(&self, name: &str) -> Normalized {
        Normalized {
            name: self.pattern.replace_all(name, "").into_owned(),
            minified: self.pattern.is_match(name),
        }
    }
}

impl<F> MinifiedRule for F
where
    F: Fn(&str) -> Normalized,
{
    fn normalize(&self, name: &str) -> Normalized {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_marker() -> MinifiedMarker {
        MinifiedMarker::new(DEFAULT_MINIFIED_PATTERN).unwrap()
    }

    #[test]
    fn test_default_marker() {
        let marker = default_marker();

        let n = marker.normalize("app.min.css");
        assert_eq!(n.name, "app.css");
        assert!(n.minified);

        let n = marker.normalize("js/vendor.min.js");
        assert_eq!(n.name, "js/vendor.js");
        assert!(n.minified);
    }

    #[test]
    fn test_unmarked_name_is_unchanged() {
        let marker = default_marker();
        let n = marker.normalize("app.css");
        assert_eq!(n, Normalized { name: "app.css".to_string(), minified: false });
    }

    #[test]
    fn test_word_boundary() {
        let marker = default_marker();
        let n = marker.normalize("app.mine.css");
        assert_eq!(n.name, "app.mine.css");
        assert!(!n.minified);

        let n = marker.normalize("app.min");
        assert_eq!(n.name, "app");
        assert!(n.minified);
    }

    #[test]
    fn test_all_occurrences_removed() {
        let marker = default_marker();
        let n = marker.normalize("a.min.b.min.js");
        assert_eq!(n.name, "a.b.js");
        assert!(n.minified);
        // Stable across calls
        assert_eq!(marker.normalize("a.min.b.min.js"), n);
    }

    #[test]
    fn test_custom_pattern() {
        let marker = MinifiedMarker::new(r"-min").unwrap();
        assert_eq!(marker.pattern(), "-min");

        let n = marker.normalize("app-min.js");
        assert_eq!(n.name, "app.js");
        assert!(n.minified);

        let n = marker.normalize("app.min.js");
        assert!(!n.minified);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(MinifiedMarker::new("(unclosed").is_err());
    }

    #[test]
    fn test_closure_rule() {
        let rule = |name: &str| match name.strip_prefix("dist/") {
            Some(rest) => Normalized { name: rest.to_string(), minified: true },
            None => Normalized { name: name.to_string(), minified: false },
        };

        assert_eq!(rule.normalize("dist/app.js").name, "app.js");
        assert!(rule.normalize("dist/app.js").minified);
        assert!(!rule.normalize("app.js").minified);
    }
}
