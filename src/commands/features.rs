//! Implementation of the `amur features` command.

use crate::error::Result;
use crate::generator::{FeatureGroup, TemplateStore, UnitKind};

/// List every feature group with the files it contributes.
pub fn cmd_features() -> Result<()> {
    let store = TemplateStore::builtin()?;
    for line in describe(&store) {
        println!("{}", line);
    }
    Ok(())
}

fn describe(store: &TemplateStore) -> Vec<String> {
    let mut lines = Vec::new();
    for group in store.groups() {
        let heading = match group {
            FeatureGroup::Base => "base (always)".to_string(),
            FeatureGroup::Feature(feature) => format!("{} (--{})", feature, feature.flag()),
        };
        lines.push(heading);

        for unit in store.units_in(group) {
            match &unit.kind {
                UnitKind::File { .. } => lines.push(format!("  {}", unit.logical_path)),
                UnitKind::ManifestFragment(fragment) => {
                    let deps = fragment.dependencies.len() + fragment.dev_dependencies.len();
                    lines.push(format!("  {} (+{} dependencies)", unit.logical_path, deps));
                }
            }
        }
    }
    lines
}
