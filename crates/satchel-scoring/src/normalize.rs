use satchel_core::entity::Entity;

/// Min-max normalize an arbitrary numeric field to [0, 1] in place
/// (the normalized value overwrites `score_field` on the copies).
pub fn normalize_scores(entities: &[Entity], score_field: &str) -> Vec<Entity> {
    normalize_scores_into(entities, score_field, score_field)
}

/// `normalize_scores` writing to a separate output field.
///
/// Same degradations as similarity scoring: all-equal maps every present
/// value to 1.0, missing or non-numeric values map to 0.0.
pub fn normalize_scores_into(
    entities: &[Entity],
    score_field: &str,
    output_field: &str,
) -> Vec<Entity> {
    let raw: Vec<Option<f64>> = entities.iter().map(|e| e.number(score_field)).collect();

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
                    if hi > lo {
                        (v - lo) / (hi - lo)
                    } else {
                        1.0
                    }
                }
                _ => 0.0,
            };

            let mut copy = entity.clone();
            copy.insert(output_field, score);
            copy
        })
        .collect()
}
