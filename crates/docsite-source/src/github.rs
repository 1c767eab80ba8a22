//! Raw content host source.
//!
//! Fetches `{base_url}/{repository_id}/{branch}/{file_path}` with a shared
//! [`ureq::Agent`] so connections are pooled across requests.

use std::time::Duration;

use ureq::Agent;

use crate::source::{ContentSource, FetchError, validate_request};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("docsite/", env!("CARGO_PKG_VERSION"));

/// Content source backed by a raw content HTTP host.
pub struct GitHubSource {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubSource {
    /// Public raw content host for GitHub repositories.
    pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com";

    /// Create a source for `base_url` with a global request timeout.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer {token}` with every request.
    ///
    /// An empty token is ignored.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    /// URL of a file at a revision.
    #[must_use]
    pub fn file_url(&self, repository_id: &str, branch: &str, file_path: &str) -> String {
        format!("{}/{repository_id}/{branch}/{file_path}", self.base_url)
    }
}

impl ContentSource for GitHubSource {
    fn fetch(
        &self,
        repository_id: &str,
        branch: &str,
        file_path: &str,
    ) -> Result<Option<String>, FetchError> {
        validate_request(repository_id, branch, file_path)?;

        let url = self.file_url(repository_id, branch, file_path);
        tracing::debug!(url = %url, "Fetching upstream document");

        let mut request = self.agent.get(&url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        let response = request.call()?;

        let status = response.status().as_u16();
        if !check_status(status, &url)? {
            tracing::debug!(url = %url, "Upstream document not found");
            return Ok(None);
        }

        let text = response.into_body().read_to_string()?;
        Ok(Some(text))
    }

    fn backend(&self) -> &'static str {
        "GitHub"
    }
}

/// Map an upstream status to an outcome.
///
/// Returns `Ok(true)` when the body holds the document, `Ok(false)` for 404.
fn check_status(status: u16, url: &str) -> Result<bool, FetchError> {
    match status {
        200..=299 => Ok(true),
        404 => Ok(false),
        _ => Err(FetchError::Upstream {
            status,
            url: url.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn source() -> GitHubSource {
        GitHubSource::new("https://raw.example.com/", Duration::from_secs(5))
    }

    #[test]
    fn test_file_url() {
        assert_eq!(
            source().file_url("tanstack/query", "main", "docs/overview.md"),
            "https://raw.example.com/tanstack/query/main/docs/overview.md"
        );
    }

    #[test]
    fn test_file_url_default_base() {
        let source = GitHubSource::new(GitHubSource::DEFAULT_BASE_URL, Duration::from_secs(5));
        assert_eq!(
            source.file_url("tanstack/router", "v1", "docs/router/overview.md"),
            "https://raw.githubusercontent.com/tanstack/router/v1/docs/router/overview.md"
        );
    }

    #[test]
    fn test_check_status_success() {
        assert!(check_status(200, "u").unwrap());
    }

    #[test]
    fn test_check_status_not_found() {
        assert!(!check_status(404, "u").unwrap());
    }

    #[test]
    fn test_check_status_other_is_upstream_error() {
        for status in [301, 403, 500, 503] {
            let err = check_status(status, "https://raw.example.com/x").unwrap_err();
            assert_eq!(err.upstream_status(), Some(status));
            assert!(err.to_string().contains("https://raw.example.com/x"));
        }
    }

    #[test]
    fn test_with_token_ignores_empty() {
        assert!(source().with_token("").token.is_none());
        assert_eq!(
            source().with_token("ghp_abc").token.as_deref(),
            Some("ghp_abc")
        );
    }

    #[test]
    fn test_fetch_rejects_invalid_request_without_network() {
        let err = source()
            .fetch("tanstack/query", "", "docs/overview.md")
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }
}
