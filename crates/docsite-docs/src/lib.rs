//! Document loading for docsite.
//!
//! [`DocsLoader`] turns a `(repo, branch, path)` request into a served
//! document:
//!
//! 1. check the shared [`DocumentCache`]
//! 2. on a miss, fetch `{path}.md` from the [`ContentSource`](docsite_source::ContentSource)
//! 3. split front matter and derive the excerpt
//! 4. cache the result with the cache's TTL
//!
//! A document that does not exist upstream becomes a
//! [`DocsOutcome::Redirect`] to the caller-supplied fallback path, never an
//! error.
//!
//! The loader also reads each library's sidebar config
//! ([`DocsNavigation`]) through a second cache.

mod document;
mod error;
mod loader;
mod navigation;

pub use document::{DocKey, DocsOutcome, DocsRequest, ResolvedDocument};
pub use error::DocsError;
pub use loader::{DocsLoader, DocumentCache, NavigationCache};
pub use navigation::{
    DocSearch, DocsNavigation, FrameworkMenu, NAVIGATION_FILE, NavItem, NavSection,
};
