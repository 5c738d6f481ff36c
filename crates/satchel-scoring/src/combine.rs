use std::collections::BTreeMap;

use satchel_core::constants::SCORE_FIELD;
use satchel_core::entity::Entity;
use satchel_core::errors::{ConfigError, SatchelResult};

/// Combine named per-entity score fields into one weighted score.
///
/// The combined score is the weighted sum of the named fields divided by
/// the sum of all weights — weights need not sum to 1, and a score name
/// absent on an entity contributes 0 for that term. Writes `score`.
pub fn combine_scores(
    entities: &[Entity],
    weights: &BTreeMap<String, f64>,
) -> SatchelResult<Vec<Entity>> {
    combine_scores_into(entities, weights, SCORE_FIELD)
}

/// `combine_scores` with an explicit output field.
pub fn combine_scores_into(
    entities: &[Entity],
    weights: &BTreeMap<String, f64>,
    output_field: &str,
) -> SatchelResult<Vec<Entity>> {
    for (name, weight) in weights {
        if *weight < 0.0 {
            return Err(ConfigError::NegativeWeight {
                name: name.clone(),
                weight: *weight,
            }
            .into());
        }
    }

    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return Err(ConfigError::DegenerateWeights.into());
    }

    Ok(entities
        .iter()
        .map(|entity| {
            let weighted: f64 = weights
                .iter()
                .map(|(name, weight)| entity.number(name).unwrap_or(0.0) * weight)
                .sum();

            let mut copy = entity.clone();
            copy.insert(output_field, weighted / total);
            copy
        })
        .collect())
}
