//! Config struct definition and default implementation.

use crate::generator::context::{DEFAULT_MAIN_ENTRY, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};

/// File name looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "amur.yaml";

/// Configuration for project generation.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Manifest defaults
    // =========================================================================
    /// Version written to the generated manifest.
    pub version: String,

    /// Whether the generated manifest is marked private.
    pub private: bool,

    /// Entry point written to the manifest `main` field.
    pub main_entry: String,

    // =========================================================================
    // Post-generation
    // =========================================================================
    /// Command run inside the output root to install dependencies.
    /// Parsed with shell-words; no shell is involved.
    pub install_command: String,
}

fn default_install_command() -> String {
    "npm install".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            private: true,
            main_entry: DEFAULT_MAIN_ENTRY.to_string(),
            install_command: default_install_command(),
        }
    }
}
