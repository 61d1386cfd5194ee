//! Placeholder substitution for file templates.
//!
//! # Syntax
//!
//! - `{{ name }}` - Substitutes the context field `name` (surrounding
//!   whitespace is trimmed)
//! - Single `{` and `}` are copied through untouched, so JavaScript and JSON
//!   templates need no escaping
//!
//! Substitution is single-pass: an expanded value is never scanned again.
//! Unknown fields are a hard error rather than an empty string, since a
//! leftover or blanked placeholder would corrupt the generated project.

use super::context::Context;
use super::store::{TemplateUnit, UnitKind};
use crate::error::{AmurError, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Render a FILE unit to its final bytes.
pub fn render(unit: &TemplateUnit, ctx: &Context) -> Result<Vec<u8>> {
    match &unit.kind {
        UnitKind::File { content } => {
            render_template(content, &unit.logical_path, ctx).map(String::into_bytes)
        }
        UnitKind::ManifestFragment(_) => Err(AmurError::Template {
            path: unit.logical_path.clone(),
            reason: "manifest fragments are composed, not rendered".to_string(),
        }),
    }
}

/// Substitute every `{{ field }}` in `template` with its context value.
///
/// `path` is only used to name the template in errors.
pub fn render_template(template: &str, path: &str, ctx: &Context) -> Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let position = template.len() - rest.len() + start;
        result.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(CLOSE).ok_or_else(|| AmurError::Template {
            path: path.to_string(),
            reason: format!("unclosed '{}' at position {}", OPEN, position),
        })?;

        let name = after_open[..end].trim();
        if name.is_empty() {
            return Err(AmurError::Template {
                path: path.to_string(),
                reason: format!("empty placeholder at position {}", position),
            });
        }

        let value = ctx
            .lookup(name)
            .ok_or_else(|| AmurError::UnresolvedPlaceholder {
                path: path.to_string(),
                name: name.to_string(),
            })?;
        result.push_str(&value);

        rest = &after_open[end + CLOSE.len()..];
    }

    result.push_str(rest);
    Ok(result)
}
