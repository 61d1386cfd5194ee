//! The immutable set of template units a generation run selects from.
//!
//! A store is built once, validated, and then only read. The built-in store
//! carries the Koa starter templates compiled into the binary from
//! `templates/`.

use super::feature::{Feature, FeatureGroup};
use super::manifest::ManifestFragment;
use crate::error::{AmurError, Result};
use std::collections::{BTreeSet, HashSet};

/// Output path of the generated package manifest.
pub const MANIFEST_PATH: &str = "package.json";

/// What a template unit produces.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitKind {
    /// A text file rendered against the context.
    File { content: String },
    /// A contribution to the generated manifest.
    ManifestFragment(ManifestFragment),
}

/// One renderable building block of the output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateUnit {
    /// Relative, `/`-separated output path.
    pub logical_path: String,
    pub group: FeatureGroup,
    pub kind: UnitKind,
}

impl TemplateUnit {
    pub fn is_fragment(&self) -> bool {
        matches!(self.kind, UnitKind::ManifestFragment(_))
    }
}

/// Immutable, addressable template units tagged by feature group.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    groups: BTreeSet<FeatureGroup>,
    units: Vec<TemplateUnit>,
}

impl TemplateStore {
    pub fn builder() -> TemplateStoreBuilder {
        TemplateStoreBuilder::default()
    }

    /// The Koa + Mongoose starter application.
    pub fn builtin() -> Result<Self> {
        let mut builder = Self::builder();

        for (path, content) in BASE_FILES {
            builder = builder.file(FeatureGroup::Base, *path, *content);
        }
        builder = builder.fragment(
            FeatureGroup::Base,
            parse_fragment("base", include_str!("../../templates/base/package.fragment.json"))?,
        );

        let testing = FeatureGroup::Feature(Feature::Testing);
        for (path, content) in TESTING_FILES {
            builder = builder.file(testing, *path, *content);
        }
        builder = builder.fragment(
            testing,
            parse_fragment(
                "testing",
                include_str!("../../templates/testing/package.fragment.json"),
            )?,
        );

        builder.build()
    }

    /// Every unit that applies to a run with `enabled` features.
    ///
    /// BASE comes first, then feature groups in their fixed declared order,
    /// then declaration order within a group.
    pub fn units_for(&self, enabled: &BTreeSet<Feature>) -> Result<Vec<&TemplateUnit>> {
        if let Some(missing) = enabled
            .iter()
            .find(|f| !self.groups.contains(&FeatureGroup::Feature(**f)))
        {
            return Err(AmurError::UnknownFeature(missing.id().to_string()));
        }

        let mut selected = Vec::new();
        for group in self.groups.iter().filter(|g| g.is_selected(enabled)) {
            selected.extend(self.units.iter().filter(|u| u.group == *group));
        }
        Ok(selected)
    }

    /// Declared groups in emission order.
    pub fn groups(&self) -> impl Iterator<Item = FeatureGroup> + '_ {
        self.groups.iter().copied()
    }

    /// Units declared for a single group.
    pub fn units_in(&self, group: FeatureGroup) -> impl Iterator<Item = &TemplateUnit> + '_ {
        self.units.iter().filter(move |u| u.group == group)
    }
}

/// Collects units and validates them into a [`TemplateStore`].
#[derive(Debug, Default)]
pub struct TemplateStoreBuilder {
    groups: BTreeSet<FeatureGroup>,
    units: Vec<TemplateUnit>,
}

impl TemplateStoreBuilder {
    /// Declare a feature group even if it contributes no units.
    pub fn declare(mut self, feature: Feature) -> Self {
        self.groups.insert(FeatureGroup::Feature(feature));
        self
    }

    pub fn file(
        mut self,
        group: FeatureGroup,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.groups.insert(group);
        self.units.push(TemplateUnit {
            logical_path: path.into(),
            group,
            kind: UnitKind::File {
                content: content.into(),
            },
        });
        self
    }

    pub fn fragment(mut self, group: FeatureGroup, fragment: ManifestFragment) -> Self {
        self.groups.insert(group);
        self.units.push(TemplateUnit {
            logical_path: MANIFEST_PATH.to_string(),
            group,
            kind: UnitKind::ManifestFragment(fragment),
        });
        self
    }

    /// Validate paths and per-group uniqueness.
    pub fn build(mut self) -> Result<TemplateStore> {
        self.groups.insert(FeatureGroup::Base);

        let mut seen = HashSet::new();
        for unit in &self.units {
            validate_logical_path(&unit.logical_path)?;
            if !unit.is_fragment() && unit.logical_path == MANIFEST_PATH {
                return Err(AmurError::PathCollision(unit.logical_path.clone()));
            }
            if !seen.insert((unit.group, unit.logical_path.clone())) {
                return Err(AmurError::PathCollision(unit.logical_path.clone()));
            }
        }

        Ok(TemplateStore {
            groups: self.groups,
            units: self.units,
        })
    }
}

/// Logical paths are relative and `/`-separated with no `.`, `..` or empty
/// components.
fn validate_logical_path(path: &str) -> Result<()> {
    let invalid = |reason: &str| AmurError::Template {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("empty output path"));
    }
    if path.starts_with('/') || path.contains('\\') {
        return Err(invalid("output path must be relative and '/'-separated"));
    }
    if path
        .split('/')
        .any(|c| c.is_empty() || c == "." || c == "..")
    {
        return Err(invalid("output path has an empty, '.' or '..' component"));
    }
    Ok(())
}

fn parse_fragment(group: &str, json: &str) -> Result<ManifestFragment> {
    serde_json::from_str(json).map_err(|e| AmurError::Template {
        path: format!("{}/{}", group, MANIFEST_PATH),
        reason: format!("invalid manifest fragment: {}", e),
    })
}

const BASE_FILES: &[(&str, &str)] = &[
    ("app.js", include_str!("../../templates/base/app.js")),
    (".eslintrc.json", include_str!("../../templates/base/eslintrc.json")),
    (".prettierrc", include_str!("../../templates/base/prettierrc")),
    (".gitignore", include_str!("../../templates/base/gitignore")),
    ("README.md", include_str!("../../templates/base/README.md")),
    (
        "config/default.json",
        include_str!("../../templates/base/config/default.json"),
    ),
    (
        "config/development.json",
        include_str!("../../templates/base/config/development.json"),
    ),
    ("models/index.js", include_str!("../../templates/base/models/index.js")),
    ("models/User.js", include_str!("../../templates/base/models/User.js")),
    (
        "graphql/schema.js",
        include_str!("../../templates/base/graphql/schema.js"),
    ),
    ("routes/index.js", include_str!("../../templates/base/routes/index.js")),
    ("seeds/users.js", include_str!("../../templates/base/seeds/users.js")),
];

const TESTING_FILES: &[(&str, &str)] = &[
    (
        "config/test.json",
        include_str!("../../templates/testing/config/test.json"),
    ),
    (
        "tests/modelEnv.js",
        include_str!("../../templates/testing/tests/modelEnv.js"),
    ),
    (
        "jest.config.js",
        include_str!("../../templates/testing/jest.config.js"),
    ),
];
