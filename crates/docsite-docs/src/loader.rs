//! Document loading pipeline.

use std::sync::Arc;

use docsite_cache::TtlCache;
use docsite_content::FrontMatter;
use docsite_source::ContentSource;

use crate::document::{DocKey, DocsOutcome, DocsRequest, ResolvedDocument};
use crate::error::DocsError;
use crate::navigation::DocsNavigation;

/// Cache of resolved documents.
pub type DocumentCache = TtlCache<DocKey, Arc<ResolvedDocument>>;

/// Cache of parsed navigation configs.
pub type NavigationCache = TtlCache<DocKey, DocsNavigation>;

/// Loads documents through the cache, fetching from upstream on a miss.
///
/// Caches are built once at startup and shared; entries expire with each
/// cache's default TTL. A cache is only written after a fetch has been fully
/// parsed, so a failed or abandoned load never leaves partial state behind.
pub struct DocsLoader {
    source: Arc<dyn ContentSource>,
    documents: Arc<DocumentCache>,
    navigation: Arc<NavigationCache>,
}

impl DocsLoader {
    /// Create a loader over a content source and shared caches.
    #[must_use]
    pub fn new(
        source: Arc<dyn ContentSource>,
        documents: Arc<DocumentCache>,
        navigation: Arc<NavigationCache>,
    ) -> Self {
        Self {
            source,
            documents,
            navigation,
        }
    }

    /// Backend name of the content source, for logging.
    #[must_use]
    pub fn backend(&self) -> &'static str {
        self.source.backend()
    }

    /// Load a document.
    ///
    /// A missing document is not an error: it yields
    /// [`DocsOutcome::Redirect`] to the request's `redirect_path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::InvalidRequest`] when the branch or path is empty
    /// and [`DocsError::Fetch`] when the upstream fetch fails.
    pub fn load(&self, request: &DocsRequest<'_>) -> Result<DocsOutcome, DocsError> {
        if request.branch.is_empty() {
            return Err(DocsError::InvalidRequest("branch cannot be empty".to_owned()));
        }
        if request.doc_path.is_empty() {
            return Err(DocsError::InvalidRequest(
                "document path cannot be empty".to_owned(),
            ));
        }

        let key = DocKey::new(request.repo, request.branch, request.doc_path);
        if let Some(document) = self.documents.get(&key) {
            tracing::debug!(
                repo = request.repo,
                branch = request.branch,
                path = request.doc_path,
                "Document cache hit"
            );
            return Ok(DocsOutcome::Document(document));
        }

        let file_path = format!("{}.md", request.doc_path);
        tracing::debug!(
            repo = request.repo,
            branch = request.branch,
            path = %file_path,
            backend = self.source.backend(),
            "Document cache miss, fetching"
        );

        let Some(raw) = self.source.fetch(request.repo, request.branch, &file_path)? else {
            tracing::debug!(
                path = %file_path,
                redirect = request.redirect_path,
                "Document not found"
            );
            return Ok(DocsOutcome::Redirect(request.redirect_path.to_owned()));
        };

        let document = Arc::new(resolve_document(file_path, &raw));
        self.documents.insert(key, Arc::clone(&document));
        Ok(DocsOutcome::Document(document))
    }

    /// Load the navigation config for a docs root.
    ///
    /// Returns `Ok(None)` when the library has no config at that branch.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Fetch`] when the upstream fetch fails and
    /// [`DocsError::InvalidNavigation`] when the config does not parse.
    pub fn load_navigation(
        &self,
        repo: &str,
        branch: &str,
        docs_root: &str,
    ) -> Result<Option<DocsNavigation>, DocsError> {
        if branch.is_empty() {
            return Err(DocsError::InvalidRequest("branch cannot be empty".to_owned()));
        }

        let path = DocsNavigation::file_path(docs_root);
        let key = DocKey::new(repo, branch, &path);
        if let Some(navigation) = self.navigation.get(&key) {
            tracing::debug!(repo, branch, path = %path, "Navigation cache hit");
            return Ok(Some(navigation));
        }

        let Some(raw) = self.source.fetch(repo, branch, &path)? else {
            return Ok(None);
        };

        let navigation: DocsNavigation = serde_json::from_str(&raw)
            .map_err(|source| DocsError::InvalidNavigation {
                path: path.clone(),
                source,
            })?;

        self.navigation.insert(key, navigation.clone());
        Ok(Some(navigation))
    }
}

/// Split front matter and assemble the served document.
///
/// Malformed front matter is not fatal: the whole text is served as content
/// with no metadata.
fn resolve_document(file_path: String, raw: &str) -> ResolvedDocument {
    let front_matter = docsite_content::extract(raw).unwrap_or_else(|e| {
        tracing::warn!(
            path = %file_path,
            error = %e,
            "Malformed front matter, serving raw document"
        );
        FrontMatter::without_metadata(raw)
    });

    ResolvedDocument {
        title: front_matter.title().unwrap_or_default().to_owned(),
        description: front_matter.excerpt,
        file_path,
        content: front_matter.content,
    }
}
