//! Config loading, validation, and conversion.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{AmurError, Result};
use crate::generator::ContextDefaults;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AmurError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `amur.yaml` in `cwd` is used
    /// when present, and the defaults when not.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = cwd.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            Self::load(implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AmurError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AmurError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `version` and `main_entry` must be non-empty
    /// - `install_command` must parse into at least one word
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(AmurError::Config(
                "config validation failed: version must not be empty".to_string(),
            ));
        }

        if self.main_entry.trim().is_empty() {
            return Err(AmurError::Config(
                "config validation failed: main_entry must not be empty".to_string(),
            ));
        }

        let words = shell_words::split(&self.install_command).map_err(|e| {
            AmurError::Config(format!(
                "config validation failed: install_command '{}' does not parse: {}",
                self.install_command, e
            ))
        })?;
        if words.is_empty() {
            return Err(AmurError::Config(
                "config validation failed: install_command must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Manifest defaults for the context builder.
    pub fn context_defaults(&self) -> ContextDefaults {
        ContextDefaults {
            version: self.version.clone(),
            private: self.private,
            main_entry: self.main_entry.clone(),
        }
    }
}
