//! Manifest composition.
//!
//! The generated `package.json` starts from a fixed skeleton derived from the
//! context and folds in the fragments contributed by every selected group.
//! Dependency maps merge by key union; disagreement on a version range is an
//! error. Fragment scripts may only add new keys.

use super::context::Context;
use super::store::MANIFEST_PATH;
use crate::error::{AmurError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scripts every generated project carries, in manifest order.
pub const BASE_SCRIPTS: &[(&str, &str)] = &[
    ("start", "nodemon app.js"),
    ("console", "dobukulbira"),
    ("test", "jest"),
    ("seed", "nonula seed"),
    ("drop", "nonula drop"),
];

/// A group's contribution to the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestFragment {
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub scripts: IndexMap<String, String>,
}

/// The composed project manifest, in serialization field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub title: String,
    pub version: String,
    pub private: bool,
    pub main: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    /// The skeleton every composition starts from.
    pub fn skeleton(ctx: &Context) -> Self {
        Self {
            name: ctx.project_slug.clone(),
            title: ctx.project_slug.clone(),
            version: ctx.version.clone(),
            private: ctx.is_private,
            main: ctx.main_entry.clone(),
            scripts: BASE_SCRIPTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| AmurError::Template {
            path: MANIFEST_PATH.to_string(),
            reason: format!("failed to serialize manifest: {}", e),
        })?;
        json.push('\n');
        Ok(json)
    }
}

/// Fold `fragments`, in order, into the skeleton for `ctx`.
pub fn compose<'a, I>(fragments: I, ctx: &Context) -> Result<Manifest>
where
    I: IntoIterator<Item = &'a ManifestFragment>,
{
    let mut manifest = Manifest::skeleton(ctx);

    for fragment in fragments {
        merge_ranges(&mut manifest.dependencies, &fragment.dependencies)?;
        merge_ranges(&mut manifest.dev_dependencies, &fragment.dev_dependencies)?;

        for (name, command) in &fragment.scripts {
            if manifest.scripts.contains_key(name) {
                return Err(AmurError::ScriptOverride(name.clone()));
            }
            manifest.scripts.insert(name.clone(), command.clone());
        }
    }

    tracing::debug!(
        dependencies = manifest.dependencies.len(),
        dev_dependencies = manifest.dev_dependencies.len(),
        scripts = manifest.scripts.len(),
        "composed manifest"
    );
    Ok(manifest)
}

fn merge_ranges(
    target: &mut IndexMap<String, String>,
    incoming: &IndexMap<String, String>,
) -> Result<()> {
    for (name, range) in incoming {
        match target.get(name) {
            Some(existing) if existing != range => {
                return Err(AmurError::DependencyConflict {
                    name: name.clone(),
                    existing: existing.clone(),
                    incoming: range.clone(),
                });
            }
            Some(_) => {}
            None => {
                target.insert(name.clone(), range.clone());
            }
        }
    }
    Ok(())
}
