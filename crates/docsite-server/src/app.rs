//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/libraries", get(handlers::libraries::list_libraries))
        .route("/api/styles", get(handlers::styles::get_style))
        .route(
            "/api/docs/{library}/{version}/config",
            get(handlers::navigation::get_navigation),
        );

    let docs_routes = Router::new()
        .route(
            "/{library}/{version}",
            get(handlers::libraries::get_library_version),
        )
        .route("/{library}/{version}/docs", get(handlers::docs::get_docs_root))
        .route("/{library}/{version}/docs/{*path}", get(handlers::docs::get_doc));

    Router::new()
        .merge(api_routes)
        .merge(docs_routes)
        .fallback(handlers::redirects::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::referrer_policy_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use docsite_cache::TtlCache;
    use docsite_docs::DocsLoader;
    use docsite_library::LibraryRegistry;
    use docsite_source::MockSource;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::styles::StyleRegistry;

    const OVERVIEW: &str = "---\ntitle: Overview\n---\nQuery makes fetching *easy*.\n";

    fn test_app(source: &Arc<MockSource>, styles: StyleRegistry) -> Router {
        let capacity = NonZeroUsize::new(16).unwrap();
        let source: Arc<MockSource> = Arc::clone(source);
        let loader = DocsLoader::new(
            source,
            Arc::new(TtlCache::new(capacity, None)),
            Arc::new(TtlCache::new(capacity, None)),
        );
        create_router(Arc::new(AppState {
            libraries: LibraryRegistry::builtin(),
            loader: Arc::new(loader),
            styles,
        }))
    }

    fn query_source() -> Arc<MockSource> {
        Arc::new(MockSource::new().with_file(
            "tanstack/query",
            "main",
            "docs/framework/react/overview.md",
            OVERVIEW,
        ))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_get_doc() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/query/latest/docs/framework/react/overview").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "s-maxage=1, stale-while-revalidate=300"
        );
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");

        let body = json_body(response).await;
        assert_eq!(body["title"], "Overview");
        assert_eq!(body["description"], "Query makes fetching easy.");
        assert_eq!(body["filePath"], "docs/framework/react/overview.md");
    }

    #[tokio::test]
    async fn test_get_doc_is_cached() {
        let source = query_source();
        let app = test_app(&source, StyleRegistry::new());

        get(app.clone(), "/query/latest/docs/framework/react/overview").await;
        get(app, "/query/v5/docs/framework/react/overview").await;

        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_doc_redirects_to_default() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/query/latest/docs/framework/react/missing").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location(&response),
            "/query/latest/docs/framework/react/overview"
        );
    }

    #[tokio::test]
    async fn test_dot_segment_path_redirects_to_default() {
        let source = query_source();
        let app = test_app(&source, StyleRegistry::new());

        let response = get(app, "/query/latest/docs/guide/../x").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location(&response),
            "/query/latest/docs/framework/react/overview"
        );
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_default_doc_redirects_to_landing() {
        let app = test_app(&Arc::new(MockSource::new()), StyleRegistry::new());

        let response = get(app, "/query/v4/docs/framework/react/overview").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/query/v4");
    }

    #[tokio::test]
    async fn test_docs_root_redirects_to_default_doc() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/query/latest/docs").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location(&response),
            "/query/latest/docs/framework/react/overview"
        );
    }

    #[tokio::test]
    async fn test_legacy_redirect_on_docs_route() {
        let source = query_source();
        let app = test_app(&source, StyleRegistry::new());

        let response = get(app, "/ranger/v3/docs/overview").await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            location(&response),
            "/ranger/v3/docs/introduction?from=reactRangerV3"
        );
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_legacy_redirect_on_fallback() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/react-query/docs/overview").await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            location(&response),
            "/query/latest/docs/framework/react/overview?from=reactQueryV3"
        );
    }

    #[tokio::test]
    async fn test_fallback_not_found() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/nothing/here/at/all/really").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        let body = json_body(response).await;
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_unknown_library() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/nope/latest/docs/overview").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["library"], "nope");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let source = Arc::new(MockSource::new().with_failure(
            "tanstack/query",
            "main",
            "docs/framework/react/overview.md",
            500,
        ));
        let app = test_app(&source, StyleRegistry::new());

        let response = get(app, "/query/latest/docs/framework/react/overview").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["upstreamStatus"], 500);
    }

    #[tokio::test]
    async fn test_navigation() {
        let source = Arc::new(MockSource::new().with_file(
            "tanstack/query",
            "v4",
            "docs/config.json",
            r#"{ "sections": [
                { "label": "Guide", "children": [{ "label": "Overview", "to": "overview" }] }
            ] }"#,
        ));
        let app = test_app(&source, StyleRegistry::new());

        let response = get(app, "/api/docs/query/v4/config").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["sections"][0]["children"][0]["to"], "overview");
    }

    #[tokio::test]
    async fn test_navigation_absent() {
        let app = test_app(&Arc::new(MockSource::new()), StyleRegistry::new());

        let response = get(app, "/api/docs/query/latest/config").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_libraries() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/api/libraries").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["id"], "query");
        assert_eq!(body[0]["latestVersion"], "v5");
        assert_eq!(body[0]["availableVersions"][1], "v4");
    }

    #[tokio::test]
    async fn test_library_version() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/query/latest").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], "query");
        assert_eq!(body["version"], "v5");
        assert_eq!(body["branch"], "main");
        assert_eq!(body["docsUrl"], "/query/latest/docs/framework/react/overview");
    }

    #[tokio::test]
    async fn test_get_style() {
        let mut styles = StyleRegistry::new();
        let hash = styles.insert("body { margin: 0; }");
        let app = test_app(&query_source(), styles);

        let response = get(app, &format!("/api/styles?hash={hash}")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_get_style_unknown_hash() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/api/styles?hash=0000000000000000").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_style_missing_hash() {
        let app = test_app(&query_source(), StyleRegistry::new());

        let response = get(app, "/api/styles").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
