//! Error types for amur.
//!
//! Uses thiserror for derive macros. Every engine failure is fatal and is
//! propagated to the caller unchanged; nothing is retried.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for amur operations.
#[derive(Error, Debug)]
pub enum AmurError {
    /// The project name is empty or unsafe to use as a directory name.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A feature was enabled that the template store does not declare.
    #[error("unknown feature '{0}': the template store declares no group for it")]
    UnknownFeature(String),

    /// A template references a context field that does not exist.
    #[error("unresolved placeholder '{{{{{name}}}}}' in template '{path}'")]
    UnresolvedPlaceholder { path: String, name: String },

    /// A template is malformed or used in the wrong way.
    #[error("template error in '{path}': {reason}")]
    Template { path: String, reason: String },

    /// Two manifest fragments declare the same dependency with different ranges.
    #[error(
        "dependency conflict for '{name}': '{existing}' already declared, fragment wants '{incoming}'"
    )]
    DependencyConflict {
        name: String,
        existing: String,
        incoming: String,
    },

    /// A feature fragment tried to replace an existing script.
    #[error("script '{0}' is already defined and cannot be overridden by a feature")]
    ScriptOverride(String),

    /// Two template units target the same output path.
    #[error("path collision: '{0}' is produced by more than one template unit")]
    PathCollision(String),

    /// Writing the output tree failed.
    #[error("failed to materialize '{}': {reason}", .path.display())]
    Materialization { path: PathBuf, reason: String },

    /// The configuration file is unreadable or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Dependency installation failed.
    #[error("dependency installation failed: {0}")]
    Install(String),

    /// Git operation failed.
    #[error("git operation failed: {0}")]
    Git(String),
}

impl AmurError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AmurError::InvalidName { .. } | AmurError::UnknownFeature(_) | AmurError::Config(_) => {
                exit_codes::USER_ERROR
            }
            AmurError::UnresolvedPlaceholder { .. }
            | AmurError::Template { .. }
            | AmurError::DependencyConflict { .. }
            | AmurError::ScriptOverride(_)
            | AmurError::PathCollision(_) => exit_codes::TEMPLATE_FAILURE,
            AmurError::Materialization { .. } => exit_codes::FILESYSTEM_FAILURE,
            AmurError::Install(_) | AmurError::Git(_) => exit_codes::COLLABORATOR_FAILURE,
        }
    }

    pub(crate) fn materialization(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        AmurError::Materialization {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for amur operations.
pub type Result<T> = std::result::Result<T, AmurError>;
