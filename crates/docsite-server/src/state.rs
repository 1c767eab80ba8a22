//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use docsite_docs::DocsLoader;
use docsite_library::LibraryRegistry;

use crate::styles::StyleRegistry;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documented libraries and their redirect tables.
    pub(crate) libraries: LibraryRegistry,
    /// Document loader with its caches.
    pub(crate) loader: Arc<DocsLoader>,
    /// Hashed stylesheets.
    pub(crate) styles: StyleRegistry,
}
