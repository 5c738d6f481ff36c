use satchel_core::constants::SIMILARITY_SCORE_FIELD;
use satchel_core::entity::Entity;

/// Options for similarity normalization.
#[derive(Debug, Clone)]
pub struct SimilarityOptions {
    /// Field the normalized score is written to.
    pub score_field: String,
    /// Treat the raw value as a distance (lower = more similar) and flip
    /// the normalized score. Vector stores disagree on polarity.
    pub invert: bool,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            score_field: SIMILARITY_SCORE_FIELD.to_string(),
            invert: false,
        }
    }
}

/// Min-max normalize an already-computed raw similarity to [0, 1].
///
/// The batch maximum maps to 1.0 and the minimum to 0.0. When every raw
/// value is equal there is nothing to rank, so every present value maps to
/// 1.0 (no divide-by-zero). Entities missing the field score 0.0.
pub fn score_by_similarity(entities: &[Entity], similarity_field: &str) -> Vec<Entity> {
    score_by_similarity_with(entities, similarity_field, &SimilarityOptions::default())
}

/// `score_by_similarity` with an explicit score field and polarity.
pub fn score_by_similarity_with(
    entities: &[Entity],
    similarity_field: &str,
    options: &SimilarityOptions,
) -> Vec<Entity> {
    let raw: Vec<Option<f64>> = entities
        .iter()
        .map(|e| e.number(similarity_field))
        .collect();

    let bounds = raw
        .iter()
        .flatten()
        .fold(None::<(f64, f64)>, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    entities
        .iter()
        .zip(raw)
        .map(|(entity, value)| {
            let score = match (value, bounds) {
                (Some(v), Some((lo, hi))) => {
                    let normalized = if hi > lo { (v - lo) / (hi - lo) } else { 1.0 };
                    if options.invert {
                        1.0 - normalized
                    } else {
                        normalized
                    }
                }
                _ => 0.0,
            };

            let mut copy = entity.clone();
            copy.insert(options.score_field.as_str(), score);
            copy
        })
        .collect()
}
