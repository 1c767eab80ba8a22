//! Request, result and cache key types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Cache key for a file at a revision.
///
/// `path` is the repository path without extension for documents, and the
/// full file path for navigation configs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocKey {
    /// Upstream repository (`owner/name`).
    pub repo: String,
    /// Branch name.
    pub branch: String,
    /// Repository path.
    pub path: String,
}

impl DocKey {
    /// Create a key.
    #[must_use]
    pub fn new(repo: &str, branch: &str, path: &str) -> Self {
        Self {
            repo: repo.to_owned(),
            branch: branch.to_owned(),
            path: path.to_owned(),
        }
    }
}

/// Document load request.
#[derive(Clone, Copy, Debug)]
pub struct DocsRequest<'a> {
    /// Upstream repository (`owner/name`).
    pub repo: &'a str,
    /// Branch holding the docs.
    pub branch: &'a str,
    /// Repository path of the document without extension
    /// (e.g., `docs/framework/react/overview`).
    pub doc_path: &'a str,
    /// Where to send the reader when the document does not exist.
    pub redirect_path: &'a str,
}

/// Outcome of a document load.
#[derive(Clone, Debug, PartialEq)]
pub enum DocsOutcome {
    /// The document was found.
    Document(Arc<ResolvedDocument>),
    /// The document does not exist; redirect to this path.
    Redirect(String),
}

/// A document ready to serve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDocument {
    /// `title` front matter field, or empty.
    pub title: String,
    /// Plain-text excerpt.
    pub description: String,
    /// Repository path of the source file, with extension.
    pub file_path: String,
    /// Markdown body without the front matter block.
    pub content: String,
}
