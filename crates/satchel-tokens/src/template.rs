//! Cost estimation for `{field}` placeholder templates.

use satchel_core::entity::{render_text, Entity};

use crate::estimator::TokenEstimator;

impl TokenEstimator {
    /// Estimate the token cost of formatting each entity with a template
    /// containing `{field}` placeholders.
    ///
    /// When an entity is missing a placeholder field, its cost degrades to a
    /// conservative estimate (the raw template plus the whole entity)
    /// instead of failing.
    pub fn estimate_formatted(&self, entities: &[Entity], template: &str) -> usize {
        entities
            .iter()
            .map(|entity| match substitute(template, entity) {
                Some(formatted) => self.count_cached(&formatted),
                None => self.count_cached(template) + self.count_for_entity(entity, None),
            })
            .sum()
    }
}

/// Substitute `{field}` placeholders; `None` when any named field is absent.
/// Null fields render as empty text. A `{` without a closing brace is
/// treated as literal text.
fn substitute(template: &str, entity: &Entity) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Some(out);
        };

        let value = entity.get(&after[..end])?;
        if let Some(text) = render_text(value) {
            out.push_str(&text);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Some(out)
}
