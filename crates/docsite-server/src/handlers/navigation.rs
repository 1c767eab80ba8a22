//! Docs navigation endpoint.
//!
//! `GET /api/docs/{library}/{version}/config` returns the library's sidebar
//! config at the branch the version resolves to.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/docs/{library}/{version}/config.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Path((library_id, version)): Path<(String, String)>,
) -> Result<impl IntoResponse, ServerError> {
    let library = *state
        .libraries
        .get(&library_id)
        .ok_or_else(|| ServerError::UnknownLibrary(library_id.clone()))?;
    let branch = library.resolve_branch(Some(&version)).to_owned();

    let loader = Arc::clone(&state.loader);
    let navigation = tokio::task::spawn_blocking(move || {
        loader.load_navigation(library.repo, &branch, library.docs_root)
    })
    .await??
    .ok_or_else(|| ServerError::NotFound(format!("/api/docs/{library_id}/{version}/config")))?;

    Ok(Json(navigation))
}
