use std::cmp::Ordering;

use tracing::debug;

use satchel_core::entity::Entity;
use satchel_core::models::{FitResult, RejectReason, RejectedEntity};
use satchel_tokens::TokenEstimator;

use crate::options::FitOptions;

/// Selects the entities that fit within a hard token budget.
///
/// Holds only the estimator — no other state, safe to share and reuse.
#[derive(Debug, Clone)]
pub struct BudgetFitter {
    estimator: TokenEstimator,
}

impl BudgetFitter {
    pub fn new(estimator: TokenEstimator) -> Self {
        Self { estimator }
    }

    /// The estimator used for costing.
    pub fn estimator(&self) -> &TokenEstimator {
        &self.estimator
    }

    /// Fit candidates to a hard budget.
    ///
    /// Priority order determines candidacy order, not a hard cutoff: the
    /// walk visits every candidate once, in (optionally score-sorted)
    /// order, and an entity that would overflow the budget is skipped
    /// while the walk continues — later, smaller entities may still fit.
    /// The selection's token sum never exceeds `max_tokens`, and every
    /// candidate lands in exactly one of selection/rejected.
    ///
    /// A budget of 0 yields an empty selection, not an error.
    pub fn fit_to_budget(
        &self,
        candidates: &[Entity],
        max_tokens: usize,
        options: &FitOptions,
    ) -> FitResult {
        let mut ordered: Vec<&Entity> = candidates.iter().collect();
        if options.sort_by_score {
            // Stable sort: equal scores keep input order.
            ordered.sort_by(|a, b| {
                score_of(b, &options.score_field)
                    .partial_cmp(&score_of(a, &options.score_field))
                    .unwrap_or(Ordering::Equal)
            });
        }

        let mut selected: Vec<Entity> = Vec::new();
        let mut rejected: Vec<RejectedEntity> = Vec::new();
        let mut tokens_used = 0usize;

        for entity in ordered {
            if let Some(min_score) = options.min_score {
                if score_of(entity, &options.score_field) < min_score {
                    rejected.push(RejectedEntity {
                        entity: entity.clone(),
                        reason: RejectReason::Score,
                    });
                    continue;
                }
            }

            let cost = self
                .estimator
                .count_for_entity(entity, options.token_fields.as_deref());

            if max_tokens > 0 && tokens_used + cost <= max_tokens {
                tokens_used += cost;
                selected.push(entity.clone());
            } else {
                rejected.push(RejectedEntity {
                    entity: entity.clone(),
                    reason: RejectReason::Budget,
                });
            }
        }

        debug!(
            selected = selected.len(),
            rejected = rejected.len(),
            tokens_used,
            max_tokens,
            "fit complete"
        );

        FitResult {
            selected,
            rejected,
            tokens_used,
            tokens_remaining: max_tokens - tokens_used,
        }
    }
}

/// Score reading for ordering and cutoffs; a missing field reads as 0.0.
fn score_of(entity: &Entity, score_field: &str) -> f64 {
    entity.number(score_field).unwrap_or(0.0)
}
