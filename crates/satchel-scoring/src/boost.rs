use std::collections::BTreeMap;

use satchel_core::entity::Entity;

/// How a priority boost is applied to an existing score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoostMode {
    #[default]
    Multiply,
    Add,
}

impl BoostMode {
    /// The boost that leaves a score unchanged.
    fn identity(self) -> f64 {
        match self {
            Self::Multiply => 1.0,
            Self::Add => 0.0,
        }
    }

    fn apply(self, score: f64, boost: f64) -> f64 {
        match self {
            Self::Multiply => score * boost,
            Self::Add => score + boost,
        }
    }
}

/// Boost an existing score by a per-category factor, e.g. statuses
/// `{"urgent": 1.5, "done": 0.5}`. Categories without a mapping (or
/// entities missing the priority field) get the identity boost.
pub fn add_priority_boost(
    entities: &[Entity],
    priority_field: &str,
    boosts: &BTreeMap<String, f64>,
    score_field: &str,
    mode: BoostMode,
) -> Vec<Entity> {
    entities
        .iter()
        .map(|entity| {
            let score = entity.number(score_field).unwrap_or(0.0);
            let boost = entity
                .get(priority_field)
                .and_then(|v| v.as_str())
                .and_then(|category| boosts.get(category))
                .copied()
                .unwrap_or_else(|| mode.identity());

            let mut copy = entity.clone();
            copy.insert(score_field, mode.apply(score, boost));
            copy
        })
        .collect()
}
