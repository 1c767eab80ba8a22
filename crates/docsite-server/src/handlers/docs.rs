//! Documents endpoint.
//!
//! `GET /{library}/{version}/docs/{*path}` resolves the version to a branch,
//! loads the document through the cache and returns it as JSON. A missing
//! document redirects to the library's default doc.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use docsite_docs::{DocsOutcome, DocsRequest};
use docsite_library::Library;

use crate::error::ServerError;
use crate::handlers::legacy_redirect;
use crate::state::AppState;

/// Cache policy for served documents: shared caches may hold a copy for a
/// second and keep serving it for five minutes while revalidating.
const DOCS_CACHE_CONTROL: &str = "s-maxage=1, stale-while-revalidate=300";

/// Handle GET /{library}/{version}/docs/{*path}.
pub(crate) async fn get_doc(
    State(state): State<Arc<AppState>>,
    Path((library_id, version, path)): Path<(String, String, String)>,
    uri: Uri,
) -> Result<Response, ServerError> {
    if let Some(redirect) = legacy_redirect(&state, &uri) {
        return Ok(redirect);
    }

    let library = *state
        .libraries
        .get(&library_id)
        .ok_or_else(|| ServerError::UnknownLibrary(library_id.clone()))?;
    let doc = path.trim_matches('/');
    if !is_doc_path(doc) {
        tracing::debug!(library = library.id, path = %path, "Unusable doc path, redirecting");
        return Ok(default_doc_redirect(&library, &version));
    }

    let branch = library.resolve_branch(Some(&version)).to_owned();
    let doc_path = library.doc_path(doc);
    let redirect_path = fallback_path(&library, &version, doc);

    let loader = Arc::clone(&state.loader);
    let outcome = tokio::task::spawn_blocking(move || {
        loader.load(&DocsRequest {
            repo: library.repo,
            branch: &branch,
            doc_path: &doc_path,
            redirect_path: &redirect_path,
        })
    })
    .await??;

    Ok(match outcome {
        DocsOutcome::Document(document) => (
            [(header::CACHE_CONTROL, DOCS_CACHE_CONTROL)],
            Json(document.as_ref()),
        )
            .into_response(),
        DocsOutcome::Redirect(to) => Redirect::temporary(&to).into_response(),
    })
}

/// Handle GET /{library}/{version}/docs.
pub(crate) async fn get_docs_root(
    State(state): State<Arc<AppState>>,
    Path((library_id, version)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, ServerError> {
    if let Some(redirect) = legacy_redirect(&state, &uri) {
        return Ok(redirect);
    }

    let library = state
        .libraries
        .get(&library_id)
        .ok_or_else(|| ServerError::UnknownLibrary(library_id.clone()))?;
    Ok(default_doc_redirect(library, &version))
}

fn default_doc_redirect(library: &Library, version: &str) -> Response {
    Redirect::temporary(&format!(
        "/{}/{version}/docs/{}",
        library.id, library.default_doc
    ))
    .into_response()
}

/// Whether `doc` names a document: non-empty, with no empty, `.` or `..`
/// segments.
fn is_doc_path(doc: &str) -> bool {
    !doc.is_empty() && doc.split('/').all(|segment| !matches!(segment, "" | "." | ".."))
}

/// Where to send the reader when `doc` does not exist.
///
/// The default doc, or the library landing page when the default doc
/// itself is the one missing.
fn fallback_path(library: &Library, version: &str, doc: &str) -> String {
    if doc == library.default_doc {
        format!("/{}/{version}", library.id)
    } else {
        format!("/{}/{version}/docs/{}", library.id, library.default_doc)
    }
}
