//! Stylesheet endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Stylesheets are content-addressed, so a response never goes stale.
const STYLES_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

#[derive(Deserialize)]
pub(crate) struct StyleQuery {
    hash: Option<String>,
}

/// Handle GET /api/styles?hash=<hash>.
pub(crate) async fn get_style(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StyleQuery>,
) -> Result<impl IntoResponse, ServerError> {
    let hash = query
        .hash
        .filter(|hash| !hash.is_empty())
        .ok_or(ServerError::MissingStyleHash)?;
    let css = state
        .styles
        .get(&hash)
        .ok_or(ServerError::StyleNotFound(hash))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, STYLES_CACHE_CONTROL),
        ],
        css.to_string(),
    ))
}
