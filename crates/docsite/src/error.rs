//! CLI error types.

use docsite_config::ConfigError;
use docsite_docs::DocsError;
use docsite_library::LibraryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Library(#[from] LibraryError),

    #[error("{0}")]
    Docs(#[from] DocsError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Document not found (readers are redirected to {0})")]
    NotFound(String),

    #[error("{0}")]
    Server(String),
}
