//! # satchel-scoring
//!
//! Attaches normalized relevance scores ([0, 1]) to entities under one or
//! more criteria. Scoring is annotation, not filtering: input order and
//! membership are always preserved, and scores land on entity copies as
//! numeric fields so per-criterion components stay auditable.

pub mod boost;
pub mod combine;
pub mod normalize;
pub mod recency;
pub mod similarity;

pub use boost::{add_priority_boost, BoostMode};
pub use combine::{combine_scores, combine_scores_into};
pub use normalize::{normalize_scores, normalize_scores_into};
pub use recency::{score_by_recency, score_by_recency_with, RecencyOptions};
pub use similarity::{score_by_similarity, score_by_similarity_with, SimilarityOptions};
