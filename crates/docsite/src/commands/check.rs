//! `docsite check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::Config;
use docsite_library::LibraryRegistry;
use docsite_server::StyleRegistry;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Validate the configuration, the library registry and stylesheets.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        config.validate()?;
        match &config.config_path {
            Some(path) => output.success(&format!("Configuration OK: {}", path.display())),
            None => output.success("Configuration OK (no docsite.toml found, using defaults)"),
        }

        let registry = LibraryRegistry::builtin();
        registry.validate()?;
        let rules: usize = registry
            .iter()
            .flat_map(|library| library.redirects)
            .map(|table| table.rules.len())
            .sum();
        output.success(&format!(
            "Libraries OK: {} libraries, {rules} redirect rules",
            registry.len()
        ));

        if let Some(dir) = &config.styles.dir {
            let styles = StyleRegistry::load_dir(dir)?;
            if styles.is_empty() {
                output.warning(&format!("No stylesheets in {}", dir.display()));
            } else {
                output.success(&format!("Stylesheets OK: {} in {}", styles.len(), dir.display()));
            }
        }

        Ok(())
    }
}
