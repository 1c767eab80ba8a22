//! HTTP request handlers.

pub(crate) mod docs;
pub(crate) mod libraries;
pub(crate) mod navigation;
pub(crate) mod redirects;
pub(crate) mod styles;

use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};

use crate::state::AppState;

/// Permanent redirect for a legacy URL, if any library's rules match.
pub(crate) fn legacy_redirect(state: &AppState, uri: &Uri) -> Option<Response> {
    let request_url = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    state
        .libraries
        .find_redirect(request_url)
        .map(|destination| Redirect::permanent(&destination).into_response())
}
