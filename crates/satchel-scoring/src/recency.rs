use chrono::{DateTime, Utc};

use satchel_core::constants::RECENCY_SCORE_FIELD;
use satchel_core::entity::Entity;
use satchel_core::errors::{ConfigError, SatchelResult};

/// Options for recency scoring.
#[derive(Debug, Clone)]
pub struct RecencyOptions {
    /// Field the score is written to.
    pub score_field: String,
    /// Time to measure age from. `None` means the time of the call —
    /// scores are a snapshot, never cached.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for RecencyOptions {
    fn default() -> Self {
        Self {
            score_field: RECENCY_SCORE_FIELD.to_string(),
            reference_time: None,
        }
    }
}

/// Score entities by recency with exponential decay:
/// `score = e^(-age_days / decay_days)`, clamped to [0, 1].
///
/// An entity that is `decay_days` old scores ~0.37 (1/e). Future dates
/// score 1.0. Entities with a missing or unparsable date score 0.0 —
/// one bad date never fails the batch.
pub fn score_by_recency(
    entities: &[Entity],
    date_field: &str,
    decay_days: f64,
) -> SatchelResult<Vec<Entity>> {
    score_by_recency_with(entities, date_field, decay_days, &RecencyOptions::default())
}

/// `score_by_recency` with an explicit score field and reference time.
pub fn score_by_recency_with(
    entities: &[Entity],
    date_field: &str,
    decay_days: f64,
    options: &RecencyOptions,
) -> SatchelResult<Vec<Entity>> {
    // Also rejects NaN, which would satisfy neither comparison.
    if !(decay_days > 0.0) {
        return Err(ConfigError::NonPositiveDecay { decay_days }.into());
    }

    let now = options.reference_time.unwrap_or_else(Utc::now);

    Ok(entities
        .iter()
        .map(|entity| {
            let score = match entity.timestamp(date_field) {
                Some(ts) => {
                    let age_days = (now - ts).num_seconds() as f64 / 86_400.0;
                    if age_days < 0.0 {
                        1.0
                    } else {
                        (-age_days / decay_days).exp().clamp(0.0, 1.0)
                    }
                }
                None => 0.0,
            };

            let mut copy = entity.clone();
            copy.insert(options.score_field.as_str(), score);
            copy
        })
        .collect())
}
