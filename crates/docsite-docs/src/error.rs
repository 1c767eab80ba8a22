//! Docs loading errors.

use docsite_source::FetchError;

/// Error loading a document or navigation config.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The request is missing a branch or path.
    #[error("invalid docs request: {0}")]
    InvalidRequest(String),

    /// The upstream fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The navigation config is not valid JSON of the expected shape.
    #[error("invalid navigation config {path}: {source}")]
    InvalidNavigation {
        /// Repository path of the config.
        path: String,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl DocsError {
    /// Upstream HTTP status, if the error came from a failing upstream.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Fetch(e) => e.upstream_status(),
            _ => None,
        }
    }
}
