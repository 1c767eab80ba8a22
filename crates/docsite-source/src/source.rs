//! Content source trait and error types.

/// File extensions a source will fetch.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx", "json"];

/// Retrieves files from an upstream repository at a given revision.
pub trait ContentSource: Send + Sync {
    /// Fetch `file_path` from `repository_id` at `branch`.
    ///
    /// Returns `Ok(None)` when the file does not exist at that revision.
    ///
    /// # Arguments
    ///
    /// * `repository_id` - Repository in `owner/name` form (e.g., "tanstack/query")
    /// * `branch` - Branch or tag name (e.g., "main", "v4")
    /// * `file_path` - Path relative to the repository root (e.g., "docs/overview.md")
    fn fetch(
        &self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
    ) -> Result<Option<String>, FetchError>;

    /// Backend identifier for logs (e.g., "GitHub", "Local").
    fn backend(&self) -> &'static str;
}

/// Error from a content source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request arguments are malformed (caller or config mistake).
    #[error("invalid fetch request: {0}")]
    InvalidRequest(String),

    /// The upstream host answered with a status other than success or 404.
    #[error("upstream returned HTTP {status} for {url}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// I/O error reading a local file.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// HTTP status of an upstream failure, if any.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Validate fetch arguments shared by every source.
///
/// `repository_id` and `branch` must be non-empty. `file_path` must be
/// relative, must not escape the repository with `..`, and must end in one
/// of [`DOCUMENT_EXTENSIONS`].
pub fn validate_request(
    repository_id: &str,
    branch: &str,
    file_path: &str,
) -> Result<(), FetchError> {
    if repository_id.is_empty() {
        return Err(FetchError::InvalidRequest(
            "repository id cannot be empty".to_owned(),
        ));
    }
    if branch.is_empty() {
        return Err(FetchError::InvalidRequest(
            "branch cannot be empty".to_owned(),
        ));
    }
    if file_path.is_empty() || file_path.starts_with('/') {
        return Err(FetchError::InvalidRequest(format!(
            "file path must be relative: {file_path:?}"
        )));
    }
    if file_path.split('/').any(|segment| segment == "..") {
        return Err(FetchError::InvalidRequest(format!(
            "file path cannot contain '..': {file_path}"
        )));
    }

    let has_known_extension = file_path
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && DOCUMENT_EXTENSIONS.contains(&ext));
    if !has_known_extension {
        return Err(FetchError::InvalidRequest(format!(
            "unsupported document extension: {file_path}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(repository_id: &str, branch: &str, file_path: &str, needle: &str) {
        let err = validate_request(repository_id, branch, file_path).unwrap_err();
        assert!(
            matches!(err, FetchError::InvalidRequest(_)),
            "Expected InvalidRequest, got {err:?}"
        );
        let msg = err.to_string();
        assert!(msg.contains(needle), "Expected '{needle}' in: {msg}");
    }

    #[test]
    fn test_validate_accepts_markdown() {
        assert!(validate_request("tanstack/query", "main", "docs/overview.md").is_ok());
        assert!(validate_request("tanstack/query", "v4", "docs/react/guide.mdx").is_ok());
        assert!(validate_request("tanstack/query", "main", "docs/config.json").is_ok());
    }

    #[test]
    fn test_validate_empty_repository() {
        assert_invalid("", "main", "docs/overview.md", "repository");
    }

    #[test]
    fn test_validate_empty_branch() {
        assert_invalid("tanstack/query", "", "docs/overview.md", "branch");
    }

    #[test]
    fn test_validate_absolute_path() {
        assert_invalid("tanstack/query", "main", "/etc/passwd.md", "relative");
    }

    #[test]
    fn test_validate_parent_segment() {
        assert_invalid("tanstack/query", "main", "docs/../../secret.md", "..");
    }

    #[test]
    fn test_validate_unknown_extension() {
        assert_invalid("tanstack/query", "main", "docs/overview.txt", "extension");
        assert_invalid("tanstack/query", "main", "docs/overview", "extension");
        assert_invalid("tanstack/query", "main", ".md", "extension");
    }

    #[test]
    fn test_upstream_status() {
        let err = FetchError::Upstream {
            status: 503,
            url: "https://example.com".to_owned(),
        };
        assert_eq!(err.upstream_status(), Some(503));
        assert_eq!(
            FetchError::InvalidRequest(String::new()).upstream_status(),
            None
        );
    }
}
