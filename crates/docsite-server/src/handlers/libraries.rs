//! Library listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use docsite_library::Library;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::legacy_redirect;
use crate::state::AppState;

/// Library summary.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryResponse {
    id: &'static str,
    name: &'static str,
    repo: &'static str,
    latest_version: &'static str,
    available_versions: &'static [&'static str],
    default_doc: &'static str,
}

impl From<&Library> for LibraryResponse {
    fn from(library: &Library) -> Self {
        Self {
            id: library.id,
            name: library.name,
            repo: library.repo,
            latest_version: library.latest_version,
            available_versions: library.available_versions,
            default_doc: library.default_doc,
        }
    }
}

/// Library landing data for one version.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionResponse {
    #[serde(flatten)]
    library: LibraryResponse,
    /// Concrete version label (`latest` resolved).
    version: String,
    /// Branch the docs are read from.
    branch: String,
    /// URL of the default doc.
    docs_url: String,
}

/// Handle GET /api/libraries.
pub(crate) async fn list_libraries(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let libraries: Vec<LibraryResponse> =
        state.libraries.iter().map(LibraryResponse::from).collect();
    Json(libraries)
}

/// Handle GET /{library}/{version}.
pub(crate) async fn get_library_version(
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

    let response = VersionResponse {
        library: LibraryResponse::from(library),
        version: library.resolve_version(&version).to_owned(),
        branch: library.resolve_branch(Some(&version)).to_owned(),
        docs_url: format!("/{}/{version}/docs/{}", library.id, library.default_doc),
    };
    Ok(Json(response).into_response())
}
