//! HTTP server for the docsite documentation service.
//!
//! This crate provides an axum server exposing:
//! - documents as JSON (`/{library}/{version}/docs/{*path}`)
//! - per-library navigation configs (`/api/docs/{library}/{version}/config`)
//! - the library list (`/api/libraries`)
//! - content-addressed stylesheets (`/api/styles?hash=...`)
//! - permanent redirects for legacy URL shapes (any other path)
//!
//! # Quick Start
//!
//! ```ignore
//! use docsite_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server(ServerConfig::default()).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (docsite-server)
//!                        │
//!                        ├─► legacy redirect tables (docsite-library)
//!                        │
//!                        └─► spawn_blocking ──► DocsLoader (docsite-docs)
//!                                                  │
//!                                                  ├─► TtlCache (docsite-cache)
//!                                                  └─► ContentSource (docsite-source)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod styles;

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use docsite_cache::TtlCache;
use docsite_docs::DocsLoader;
use docsite_library::LibraryRegistry;
use docsite_source::{ContentSource, GitHubSource, LocalSource};
use state::AppState;

pub use error::ServerError;
pub use styles::{StyleRegistry, style_hash};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Raw content host base URL.
    pub upstream_url: String,
    /// Bearer token for the content host.
    pub upstream_token: Option<String>,
    /// Upstream request timeout.
    pub upstream_timeout: Duration,
    /// Read docs from local checkouts under this directory instead.
    pub local_root: Option<PathBuf>,
    /// Whether documents are cached.
    pub cache_enabled: bool,
    /// Maximum cached entries per cache.
    pub cache_capacity: usize,
    /// Cached entry lifetime (`None` never expires).
    pub cache_ttl: Option<Duration>,
    /// Directory of stylesheets to register.
    pub styles_dir: Option<PathBuf>,
    /// Application version, logged at startup.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            upstream_url: GitHubSource::DEFAULT_BASE_URL.to_owned(),
            upstream_token: None,
            upstream_timeout: Duration::from_secs(30),
            local_root: None,
            cache_enabled: true,
            cache_capacity: 300,
            cache_ttl: Some(Duration::from_secs(1)),
            styles_dir: None,
            version: String::new(),
        }
    }
}

impl ServerConfig {
    /// Content source selected by this configuration: local checkouts when
    /// `local_root` is set, otherwise the raw content host.
    #[must_use]
    pub fn content_source(&self) -> Arc<dyn ContentSource> {
        if let Some(root) = &self.local_root {
            return Arc::new(LocalSource::new(root.clone()));
        }
        let source = GitHubSource::new(&self.upstream_url, self.upstream_timeout);
        match &self.upstream_token {
            Some(token) => Arc::new(source.with_token(token.clone())),
            None => Arc::new(source),
        }
    }

    /// A fresh cache honoring the cache settings.
    fn cache<K: std::hash::Hash + Eq, V: Clone>(&self) -> TtlCache<K, V> {
        match NonZeroUsize::new(self.cache_capacity) {
            Some(capacity) if self.cache_enabled => TtlCache::new(capacity, self.cache_ttl),
            _ => TtlCache::disabled(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the library registry is invalid, stylesheets cannot
/// be loaded, or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let libraries = LibraryRegistry::builtin();
    libraries.validate()?;

    let styles = match &config.styles_dir {
        Some(dir) => StyleRegistry::load_dir(dir)?,
        None => StyleRegistry::new(),
    };

    let source = config.content_source();
    let loader = DocsLoader::new(
        Arc::clone(&source),
        Arc::new(config.cache()),
        Arc::new(config.cache()),
    );

    tracing::info!(
        version = %config.version,
        backend = source.backend(),
        libraries = libraries.len(),
        styles = styles.len(),
        cache_enabled = config.cache_enabled,
        cache_ttl = ?config.cache_ttl,
        "Initialized docs pipeline"
    );

    let state = Arc::new(AppState {
        libraries,
        loader: Arc::new(loader),
        styles,
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docsite config.
#[must_use]
pub fn server_config_from_config(config: &docsite_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        upstream_url: config.upstream.base_url.clone(),
        upstream_token: config.upstream.token.clone(),
        upstream_timeout: config.upstream.timeout(),
        local_root: config.upstream.local_root.clone(),
        cache_enabled: config.cache.enabled,
        cache_capacity: config.cache.capacity,
        cache_ttl: config.cache_ttl(),
        styles_dir: config.styles.dir.clone(),
        version,
    }
}
