//! `docsite serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};
use docsite_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Development mode: cached documents never expire.
    #[arg(long)]
    dev: bool,

    /// Read docs from local checkouts in this directory (overrides config).
    #[arg(long, env = "DOCSITE_LOCAL_ROOT")]
    local_root: Option<PathBuf>,

    /// Enable caching (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable caching.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host.clone(),
            port: self.port,
            development: Some(self.dev),
            cache_enabled: self.resolve_cache_enabled(),
            local_root: self.local_root.clone(),
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        match &config.upstream.local_root {
            Some(root) => output.info(&format!(
                "Docs source: local checkouts in {}",
                root.display()
            )),
            None => output.info(&format!("Docs source: {}", config.upstream.base_url)),
        }
        if config.mode.is_development() {
            output.warning("Development mode: cached documents never expire");
        }
        if config.cache.enabled {
            match config.cache_ttl() {
                Some(ttl) => output.info(&format!(
                    "Cache: {} entries, {}s TTL",
                    config.cache.capacity,
                    ttl.as_secs()
                )),
                None => output.info(&format!(
                    "Cache: {} entries, no expiry",
                    config.cache.capacity
                )),
            }
        } else {
            output.info("Cache: disabled");
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `cache_enabled` from --cache/--no-cache flags.
    fn resolve_cache_enabled(&self) -> Option<bool> {
        self.no_cache.then_some(false).or(self.cache)
    }
}
