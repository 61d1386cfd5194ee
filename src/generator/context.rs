//! Rendering context for one generation run.
//!
//! The context is derived once from the raw project name and the closed set of
//! flags, and is never mutated afterwards.

use super::feature::Feature;
use crate::error::{AmurError, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Project names double as directory names and npm package names.
static PROJECT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_@-][A-Za-z0-9._@-]*$").expect("Invalid project name regex")
});

/// Default manifest version for a fresh project.
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Default entry point of the generated application.
pub const DEFAULT_MAIN_ENTRY: &str = "app.js";

/// Flags collected by the CLI. All default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFlags {
    /// Add the testing feature group.
    pub test: bool,
    /// Initialize a git repository after generation.
    pub git_init: bool,
    /// Do not run the dependency installer after generation.
    pub skip_install: bool,
}

impl ProjectFlags {
    /// Features these flags turn on. Only `test` reaches the template store;
    /// `git_init` and `skip_install` drive post-generation collaborators.
    pub fn features(&self) -> BTreeSet<Feature> {
        let mut features = BTreeSet::new();
        if self.test {
            features.insert(Feature::Testing);
        }
        features
    }
}

/// Manifest defaults, overridable from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDefaults {
    pub version: String,
    pub private: bool,
    pub main_entry: String,
}

impl Default for ContextDefaults {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            private: true,
            main_entry: DEFAULT_MAIN_ENTRY.to_string(),
        }
    }
}

/// Resolved values templates are rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub project_slug: String,
    pub project_title: String,
    pub version: String,
    pub is_private: bool,
    pub main_entry: String,
    pub enabled_features: BTreeSet<Feature>,
}

impl Context {
    /// Build the context for `raw_name`.
    ///
    /// The name is used verbatim as both slug and title; no case
    /// transformation is applied.
    ///
    /// # Errors
    ///
    /// `AmurError::InvalidName` if the name is empty or contains characters
    /// that are unsafe in a path component.
    pub fn build(raw_name: &str, flags: &ProjectFlags, defaults: &ContextDefaults) -> Result<Self> {
        validate_project_name(raw_name)?;

        Ok(Self {
            project_slug: raw_name.to_string(),
            project_title: raw_name.to_string(),
            version: defaults.version.clone(),
            is_private: defaults.private,
            main_entry: defaults.main_entry.clone(),
            enabled_features: flags.features(),
        })
    }

    /// Value of a placeholder field, by the name templates use for it.
    pub fn lookup(&self, field: &str) -> Option<String> {
        match field {
            "projectSlug" => Some(self.project_slug.clone()),
            "projectTitle" => Some(self.project_title.clone()),
            "version" => Some(self.version.clone()),
            "isPrivate" => Some(self.is_private.to_string()),
            "mainEntry" => Some(self.main_entry.clone()),
            _ => None,
        }
    }
}

/// Validate a raw project name before any I/O happens.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(AmurError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return invalid("must not be empty");
    }
    if name.starts_with('.') {
        return invalid("must not start with '.'");
    }
    if !PROJECT_NAME_REGEX.is_match(name) {
        return invalid("may only contain letters, digits, '.', '_', '@' and '-'");
    }
    Ok(())
}
