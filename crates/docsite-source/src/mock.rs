//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::source::{ContentSource, FetchError, validate_request};

/// `(repository_id, branch, file_path)`.
type FileKey = (String, String, String);

fn file_key(repository_id: &str, branch: &str, file_path: &str) -> FileKey {
    (
        repository_id.to_owned(),
        branch.to_owned(),
        file_path.to_owned(),
    )
}

/// Mock content source for testing.
///
/// Stores files in memory and counts fetches. Use the builder methods to
/// configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use docsite_source::{ContentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_file("tanstack/query", "main", "docs/overview.md", "# Overview");
///
/// let text = source.fetch("tanstack/query", "main", "docs/overview.md").unwrap();
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    files: RwLock<HashMap<FileKey, String>>,
    failures: RwLock<HashMap<FileKey, u16>>,
    fetches: AtomicUsize,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a revision.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(
        self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
        content: impl Into<String>,
    ) -> Self {
        self.insert_file(repository_id, branch, file_path, content);
        self
    }

    /// Make fetches of a file fail with an upstream status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(
        self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
        status: u16,
    ) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(file_key(repository_id, branch, file_path), status);
        self
    }

    /// Add or replace a file after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert_file(
        &self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
        content: impl Into<String>,
    ) {
        self.files
            .write()
            .unwrap()
            .insert(file_key(repository_id, branch, file_path), content.into());
    }

    /// Number of `fetch` calls made so far, including failed ones.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ContentSource for MockSource {
    fn fetch(
        &self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
    ) -> Result<Option<String>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        validate_request(repository_id, branch, file_path)?;

        let key = file_key(repository_id, branch, file_path);
        if let Some(&status) = self.failures.read().unwrap().get(&key) {
            return Err(FetchError::Upstream {
                status,
                url: format!("mock://{repository_id}/{branch}/{file_path}"),
            });
        }

        Ok(self.files.read().unwrap().get(&key).cloned())
    }

    fn backend(&self) -> &'static str {
        "Mock"
    }
}
