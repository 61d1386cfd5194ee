//! Feature identifiers and the groups template units belong to.

use std::fmt;

/// An optional feature that can be enabled for a generation run.
///
/// Variant order is the fixed order feature groups are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    /// Jest configuration, an in-memory MongoDB model environment and test
    /// database settings.
    Testing,
}

impl Feature {
    /// Stable identifier used in messages and `amur features`.
    pub fn id(self) -> &'static str {
        match self {
            Feature::Testing => "testing",
        }
    }

    /// CLI flag that enables the feature, without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            Feature::Testing => "test",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The group a template unit is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureGroup {
    /// Always emitted.
    Base,
    /// Emitted only when the feature is enabled.
    Feature(Feature),
}

impl FeatureGroup {
    /// Whether units in this group apply to a run with `enabled` features.
    pub fn is_selected(self, enabled: &std::collections::BTreeSet<Feature>) -> bool {
        match self {
            FeatureGroup::Base => true,
            FeatureGroup::Feature(feature) => enabled.contains(&feature),
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureGroup::Base => f.write_str("base"),
            FeatureGroup::Feature(feature) => feature.fmt(f),
        }
    }
}
