//! Catalog loading.
//!
//! The catalog is configuration-as-data: a JSON file with a `pages` array,
//! deserialized once at startup and immutable afterwards. A default catalog
//! covering the admin panel's own pages is compiled into the binary.

use crate::types::Catalog;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const BUNDLED_JSON: &str = include_str!("../data/pages.json");

static BUNDLED: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_str(BUNDLED_JSON).expect("bundled catalog is valid JSON")
});

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid catalog JSON: {}", e))
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;
        Self::from_json_str(&raw)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// Number of pages in the catalog.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the catalog has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses_and_is_nonempty() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_bundled_hrefs_are_absolute() {
        for page in &Catalog::bundled().pages {
            assert!(
                page.href.starts_with('/'),
                "href {} is not absolute",
                page.href
            );
        }
    }

    #[test]
    fn test_invalid_json_reports_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(err.contains("Invalid catalog JSON"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Catalog::from_file("/nonexistent/pages.json").unwrap_err();
        assert!(err.contains("/nonexistent/pages.json"));
    }
}
