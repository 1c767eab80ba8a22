//! `docsite doc` command implementation.
//!
//! Loads one document through the same pipeline the server uses and writes
//! it to stdout as JSON.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docsite_cache::TtlCache;
use docsite_config::{CliSettings, Config};
use docsite_docs::{DocsLoader, DocsOutcome, DocsRequest};
use docsite_library::LibraryRegistry;
use docsite_server::server_config_from_config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the doc command.
#[derive(Args)]
pub(crate) struct DocArgs {
    /// Library id (e.g., `query`).
    library: String,

    /// Version (`latest`, a version label, or a branch name).
    version: String,

    /// Doc path relative to the library's docs root
    /// (e.g., `framework/react/overview`).
    path: String,

    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read docs from local checkouts in this directory (overrides config).
    #[arg(long, env = "DOCSITE_LOCAL_ROOT")]
    local_root: Option<PathBuf>,
}

impl DocArgs {
    /// Execute the doc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the library is unknown, the document does not
    /// exist, or the upstream fetch fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            local_root: self.local_root.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let registry = LibraryRegistry::builtin();
        let library = registry.require(&self.library)?;

        let doc = self.path.trim_matches('/');
        let url = format!("/{}/{}/docs/{doc}", library.id, self.version);
        if let Some(destination) = registry.find_redirect(&url) {
            output.warning(&format!("{url} is a legacy URL, redirected to {destination}"));
            return Ok(());
        }

        let server_config = server_config_from_config(&config, String::new());
        let loader = DocsLoader::new(
            server_config.content_source(),
            Arc::new(TtlCache::disabled()),
            Arc::new(TtlCache::disabled()),
        );

        let branch = library.resolve_branch(Some(&self.version));
        let doc_path = library.doc_path(doc);
        let redirect_path = format!(
            "/{}/{}/docs/{}",
            library.id, self.version, library.default_doc
        );
        output.info(&format!(
            "Loading {doc_path}.md from {} at {branch} ({})",
            library.repo,
            loader.backend()
        ));

        match loader.load(&DocsRequest {
            repo: library.repo,
            branch,
            doc_path: &doc_path,
            redirect_path: &redirect_path,
        })? {
            DocsOutcome::Document(document) => {
                let mut stdout = std::io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, document.as_ref())?;
                writeln!(stdout)?;
                Ok(())
            }
            DocsOutcome::Redirect(to) => Err(CliError::NotFound(to)),
        }
    }
}
