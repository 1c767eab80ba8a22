//! Local checkout source.
//!
//! In development the libraries are checked out next to each other, e.g.
//! `~/src/query`, `~/src/router`. [`LocalSource`] reads from those checkouts
//! so docs edits show up without pushing. The branch is ignored: a checkout
//! only has whatever is on disk.

use std::io;
use std::path::{Path, PathBuf};

use crate::source::{ContentSource, FetchError, validate_request};

/// Content source reading sibling repository checkouts.
#[derive(Debug)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    /// Create a source rooted at the directory containing the checkouts.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory containing the checkouts.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a file in a checkout.
    ///
    /// The checkout directory is the repository name without its owner
    /// (`tanstack/query` → `{root}/query`).
    #[must_use]
    pub fn file_path(&self, repository_id: &str, file_path: &str) -> PathBuf {
        let name = repository_id
            .rsplit_once('/')
            .map_or(repository_id, |(_, name)| name);
        self.root.join(name).join(file_path)
    }
}

impl ContentSource for LocalSource {
    fn fetch(
        &self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
    ) -> Result<Option<String>, FetchError> {
        validate_request(repository_id, branch, file_path)?;

        let path = self.file_path(repository_id, file_path);
        tracing::debug!(path = %path.display(), branch, "Reading local document");

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FetchError::Io(e)),
        }
    }

    fn backend(&self) -> &'static str {
        "Local"
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn checkout_with(file: &str, content: &str) -> (TempDir, LocalSource) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("query").join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        let source = LocalSource::new(tmp.path().to_path_buf());
        (tmp, source)
    }

    #[test]
    fn test_file_path_strips_owner() {
        let source = LocalSource::new(PathBuf::from("/src"));

        assert_eq!(
            source.file_path("tanstack/query", "docs/overview.md"),
            PathBuf::from("/src/query/docs/overview.md")
        );
        assert_eq!(
            source.file_path("query", "docs/overview.md"),
            PathBuf::from("/src/query/docs/overview.md")
        );
    }

    #[test]
    fn test_fetch_existing_file() {
        let (_tmp, source) = checkout_with("docs/overview.md", "# Overview");

        let text = source
            .fetch("tanstack/query", "main", "docs/overview.md")
            .unwrap();
        assert_eq!(text.as_deref(), Some("# Overview"));
    }

    #[test]
    fn test_fetch_ignores_branch() {
        let (_tmp, source) = checkout_with("docs/overview.md", "# Overview");

        let text = source
            .fetch("tanstack/query", "v3", "docs/overview.md")
            .unwrap();
        assert!(text.is_some());
    }

    #[test]
    fn test_fetch_missing_file_is_none() {
        let (_tmp, source) = checkout_with("docs/overview.md", "# Overview");

        let text = source
            .fetch("tanstack/query", "main", "docs/missing.md")
            .unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn test_fetch_validates_request() {
        let (_tmp, source) = checkout_with("docs/overview.md", "# Overview");

        let err = source
            .fetch("tanstack/query", "main", "../outside.md")
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }
}
