//! Application context shared by every command.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Resolved configuration plus global CLI flags.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub robot: bool,
    pub project_root: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        tracing::debug!(?config, "resolved configuration");
        Ok(Self {
            config,
            robot: cli.robot,
            project_root,
        })
    }

    /// Resolve a possibly relative path against the project root.
    #[must_use]
    pub fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}
