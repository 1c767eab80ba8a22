//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docsite_docs::DocsError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No library with this id.
    #[error("Unknown library: {0}")]
    UnknownLibrary(String),

    /// Nothing to serve at this path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Styles request without a `hash` parameter.
    #[error("Missing style hash")]
    MissingStyleHash,

    /// No stylesheet with this hash.
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Document or navigation loading failed.
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// The blocking load task panicked or was cancelled.
    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownLibrary(_) | Self::NotFound(_) | Self::StyleNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Docs(DocsError::Fetch(e)) if e.upstream_status().is_some() => {
                StatusCode::BAD_GATEWAY
            }
            Self::Docs(DocsError::Fetch(docsite_source::FetchError::Transport(_))) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Docs(DocsError::InvalidNavigation { .. }) => StatusCode::BAD_GATEWAY,
            Self::MissingStyleHash | Self::Docs(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = match &self {
            Self::UnknownLibrary(library) => {
                json!({"error": "Unknown library", "library": library})
            }
            Self::NotFound(path) => json!({"error": "Not found", "path": path}),
            Self::StyleNotFound(hash) => json!({"error": "Style not found", "hash": hash}),
            Self::Docs(e) => match e.upstream_status() {
                Some(upstream) => json!({"error": e.to_string(), "upstreamStatus": upstream}),
                None => json!({"error": e.to_string()}),
            },
            Self::MissingStyleHash | Self::Task(_) => json!({"error": self.to_string()}),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use docsite_source::FetchError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_found_statuses() {
        assert_eq!(
            ServerError::UnknownLibrary("x".to_owned()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::StyleNotFound("abc".to_owned()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_missing_hash_is_server_error() {
        assert_eq!(
            ServerError::MissingStyleHash.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_failure_is_bad_gateway() {
        let err = ServerError::Docs(DocsError::Fetch(FetchError::Upstream {
            status: 500,
            url: "https://raw.githubusercontent.com/x".to_owned(),
        }));

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_request_is_server_error() {
        let err = ServerError::Docs(DocsError::InvalidRequest("branch cannot be empty".to_owned()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
