//! Top-level generation entry point.
//!
//! One run goes strictly through: build context, select units, render files
//! and collect fragments, compose the manifest, materialize the tree. Errors
//! from any stage are returned unchanged.

use super::context::{Context, ContextDefaults, ProjectFlags};
use super::manifest::compose;
use super::render::render;
use super::store::{MANIFEST_PATH, TemplateStore, UnitKind};
use super::tree::{OutputTree, materialize};
use crate::error::{AmurError, Result};
use std::path::{Path, PathBuf};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Directory holding the generated project.
    pub output_root: PathBuf,
    /// Relative paths of every written file, in write order.
    pub files: Vec<String>,
    /// Flags as resolved for this run, for the post-generation collaborators.
    pub flags: ProjectFlags,
}

/// Drives a generation run against an injected template store.
#[derive(Debug, Clone)]
pub struct Generator {
    store: TemplateStore,
    defaults: ContextDefaults,
}

impl Generator {
    pub fn new(store: TemplateStore, defaults: ContextDefaults) -> Self {
        Self { store, defaults }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Build the full output tree in memory without touching the filesystem.
    pub fn plan(&self, raw_name: &str, flags: &ProjectFlags) -> Result<(Context, OutputTree)> {
        let ctx = Context::build(raw_name, flags, &self.defaults)?;
        let units = self.store.units_for(&ctx.enabled_features)?;

        let mut tree = OutputTree::new();
        let mut fragments = Vec::new();
        for unit in units {
            match &unit.kind {
                UnitKind::File { .. } => {
                    let content = render(unit, &ctx)?;
                    tree.insert_file(&unit.logical_path, content)?;
                    tracing::debug!(path = %unit.logical_path, group = %unit.group, "rendered");
                }
                UnitKind::ManifestFragment(fragment) => fragments.push(fragment),
            }
        }

        let manifest = compose(fragments, &ctx)?;
        tree.insert_file(MANIFEST_PATH, manifest.to_json()?.into_bytes())?;

        Ok((ctx, tree))
    }

    /// Generate the project `raw_name` into `dest_dir/raw_name`.
    ///
    /// The output root must not exist yet. Nothing is written unless the
    /// whole tree rendered successfully; a failure during the write leaves a
    /// partial root for the caller to remove.
    pub fn generate(
        &self,
        raw_name: &str,
        flags: &ProjectFlags,
        dest_dir: &Path,
    ) -> Result<GenerationOutcome> {
        let (ctx, tree) = self.plan(raw_name, flags)?;

        let output_root = dest_dir.join(&ctx.project_slug);
        if output_root.exists() {
            return Err(AmurError::materialization(
                &output_root,
                "output directory already exists",
            ));
        }

        materialize(&tree, &output_root)?;

        let files: Vec<String> = tree.files().map(|(path, _)| path.to_string()).collect();
        tracing::info!(
            root = %output_root.display(),
            files = files.len(),
            features = ?ctx.enabled_features,
            "generated project"
        );

        Ok(GenerationOutcome {
            output_root,
            files,
            flags: *flags,
        })
    }
}
