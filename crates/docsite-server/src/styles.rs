//! Content-addressed stylesheet registry.
//!
//! Stylesheets are served by hash (`/api/styles?hash=...`), so a URL never
//! changes meaning and responses can be cached forever.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

use md5::{Digest, Md5};

/// Number of hex characters kept from the MD5 digest.
const HASH_LEN: usize = 16;

/// Map of content hash → CSS text.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Arc<str>>,
}

impl StyleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.css` file in `dir`.
    ///
    /// Subdirectories are not scanned.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or a stylesheet cannot be read.
    pub fn load_dir(dir: &Path) -> io::Result<Self> {
        let mut registry = Self::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "css") {
                let hash = registry.insert(std::fs::read_to_string(&path)?);
                tracing::debug!(path = %path.display(), hash = %hash, "Registered stylesheet");
            }
        }
        Ok(registry)
    }

    /// Register a stylesheet and return its hash.
    ///
    /// Registering the same CSS twice is a no-op returning the same hash.
    pub fn insert(&mut self, css: impl Into<String>) -> String {
        let css = css.into();
        let hash = style_hash(&css);
        self.styles.entry(hash.clone()).or_insert_with(|| css.into());
        hash
    }

    /// Stylesheet by hash.
    #[must_use]
    pub fn get(&self, hash: &str) -> Option<Arc<str>> {
        self.styles.get(hash).cloned()
    }

    /// Number of registered stylesheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no stylesheets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Hash identifying a stylesheet: MD5 truncated to 64 bits (16 hex chars).
#[must_use]
pub fn style_hash(css: &str) -> String {
    let digest = Md5::digest(css.as_bytes());
    hex::encode(digest)[..HASH_LEN].to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_style_hash_format() {
        let hash = style_hash("body { color: red; }");

        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_style_hash_depends_on_content() {
        assert_ne!(style_hash("a {}"), style_hash("b {}"));
        assert_eq!(style_hash("a {}"), style_hash("a {}"));
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = StyleRegistry::new();
        let hash = registry.insert("body { margin: 0; }");

        assert_eq!(registry.get(&hash).as_deref(), Some("body { margin: 0; }"));
        assert!(registry.get("0000000000000000").is_none());
    }

    #[test]
    fn test_insert_same_css_is_idempotent() {
        let mut registry = StyleRegistry::new();
        let first = registry.insert("a {}");
        let second = registry.insert("a {}");

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_dir_only_css_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("site.css"), "a {}").unwrap();
        std::fs::write(tmp.path().join("theme.css"), "b {}").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "not css").unwrap();
        std::fs::create_dir(tmp.path().join("nested.css")).unwrap();

        let registry = StyleRegistry::load_dir(tmp.path()).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get(&style_hash("a {}")).is_some());
        assert!(registry.get(&style_hash("b {}")).is_some());
    }

    #[test]
    fn test_load_dir_missing() {
        assert!(StyleRegistry::load_dir(Path::new("/nonexistent/styles")).is_err());
    }
}
