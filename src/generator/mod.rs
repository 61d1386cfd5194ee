//! The generation engine.
//!
//! A [`TemplateStore`] holds every template unit tagged by feature group. A
//! [`Generator`] selects the units a run needs, renders them against a
//! [`Context`], composes the manifest and writes the resulting [`OutputTree`].

pub mod context;
pub mod feature;
pub mod manifest;
pub mod orchestrator;
pub mod render;
pub mod store;
pub mod tree;


pub use context::{Context, ContextDefaults, ProjectFlags};
pub use feature::{Feature, FeatureGroup};
pub use manifest::{Manifest, ManifestFragment};
pub use orchestrator::{GenerationOutcome, Generator};
pub use store::{TemplateStore, TemplateUnit, UnitKind};
pub use tree::{OutputNode, OutputTree};
