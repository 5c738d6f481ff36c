use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Result of fitting candidates to a token budget.
///
/// Selection order is acceptance order: the (possibly score-sorted) input
/// order minus the entities that did not fit. Every candidate appears in
/// exactly one of `selected` / `rejected`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Entities that fit within the budget, in acceptance order.
    pub selected: Vec<Entity>,
    /// Entities that did not make the selection, tagged with why.
    pub rejected: Vec<RejectedEntity>,
    /// Tokens consumed by the selection. Never exceeds the budget.
    pub tokens_used: usize,
    /// Budget left over after selection.
    pub tokens_remaining: usize,
}

impl FitResult {
    /// An empty result for the given budget (nothing selected).
    pub fn empty(max_tokens: usize) -> Self {
        Self {
            tokens_remaining: max_tokens,
            ..Self::default()
        }
    }

    /// Rejected entities filtered to one rejection reason.
    pub fn rejected_for(&self, reason: RejectReason) -> impl Iterator<Item = &Entity> {
        self.rejected
            .iter()
            .filter(move |r| r.reason == reason)
            .map(|r| &r.entity)
    }
}

/// A candidate that did not make the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedEntity {
    pub entity: Entity,
    pub reason: RejectReason,
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Accepting the entity would have overflowed the token budget.
    Budget,
    /// The entity scored below the caller's `min_score` cutoff.
    Score,
}
