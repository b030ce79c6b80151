//! Configuration for the schema organizer

use crate::constants::{DEFAULT_CONTAINER_TYPE, DEFAULT_LOG_LEVEL, ENV_PREFIX, PATH_SEPARATOR};
use crate::error::{OrganizerError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for flattening and rebuilding table schemas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    /// Column type that marks a pure container (never emitted as a leaf)
    pub container_type: String,
    /// Reject sub-tables whose intermediate levels were never declared.
    /// When disabled, missing levels are created from the descendant's metadata.
    pub require_ancestor_levels: bool,
    /// Re-insert nested columns at their recorded position on rebuild
    pub preserve_column_order: bool,
    /// Default log level used by the CLI
    pub log_level: String,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            container_type: DEFAULT_CONTAINER_TYPE.to_string(),
            require_ancestor_levels: true,
            preserve_column_order: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl OrganizerConfig {
    /// Create a config from defaults overridden by environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Apply `ORGANIZER_*` environment variables on top of the current values
    pub fn apply_env_vars(&mut self) {
        self.apply_vars_from(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Unparseable boolean values leave the current setting untouched.
    pub fn apply_vars_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));

        if let Some(container_type) = var("CONTAINER_TYPE") {
            self.container_type = container_type;
        }

        if let Some(require) = var("REQUIRE_ANCESTOR_LEVELS") {
            self.require_ancestor_levels = require.parse().unwrap_or(self.require_ancestor_levels);
        }

        if let Some(preserve) = var("PRESERVE_COLUMN_ORDER") {
            self.preserve_column_order = preserve.parse().unwrap_or(self.preserve_column_order);
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.container_type.trim().is_empty() {
            return Err(OrganizerError::configuration_error(
                "container_type must not be empty",
            ));
        }

        if self.container_type.contains(PATH_SEPARATOR) {
            return Err(OrganizerError::configuration_error(format!(
                "container_type must not contain '{}'",
                PATH_SEPARATOR
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(OrganizerError::configuration_error(format!(
                "unknown log level '{}', expected one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }

        Ok(())
    }

    /// Whether a column type marks a pure container
    pub fn is_container_type(&self, column_type: &str) -> bool {
        column_type == self.container_type
    }
}
