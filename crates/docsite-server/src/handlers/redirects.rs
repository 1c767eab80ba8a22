//! Fallback handler: legacy redirects for paths no route matches.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;

use crate::error::ServerError;
use crate::handlers::legacy_redirect;
use crate::state::AppState;

/// Redirect a legacy URL, or answer 404.
pub(crate) async fn fallback(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, ServerError> {
    legacy_redirect(&state, &uri).ok_or_else(|| ServerError::NotFound(uri.path().to_owned()))
}
