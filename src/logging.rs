//! Logger setup for the CLI.
//!
//! The library only emits through the `log` facade; binaries pick the backend.

use crate::config::OrganizerConfig;
use crate::error::{OrganizerError, Result};
use env_logger::Env;

/// Initialize `env_logger` at the configured level. `RUST_LOG` takes precedence.
pub fn init(config: &OrganizerConfig) -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_target(false)
        .try_init()
        .map_err(|e| OrganizerError::configuration_error(format!("logger: {}", e)))
}
