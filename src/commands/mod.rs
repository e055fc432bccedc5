mod analyze;
mod init;

pub use analyze::cmd_analyze;
pub use init::cmd_init;

use crate::config::Config;
use crate::style;
use std::path::{Path, PathBuf};

/// Shared context for command execution: resolved project path plus loaded
/// configuration.
pub struct CommandContext {
    pub path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// Returns Err(exit_code) if the project path cannot be resolved.
    pub fn new(path: &Path) -> Result<Self, i32> {
        let resolved_path = match path.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                style::error(&format!("Could not resolve path: {}", style::path(path)));
                return Err(1);
            }
        };

        let config = Config::load(&resolved_path).unwrap_or_else(|e| {
            style::warning(&format!("Failed to load config: {}. Using defaults.", e));
            Config::default()
        });

        Ok(Self {
            path: resolved_path,
            config,
        })
    }
}
