//! # satchel
//!
//! Selects, ranks, and deduplicates schemaless domain entities so that a
//! subset fits within a hard token budget for inclusion in an LLM prompt.
//!
//! Callers typically dedupe first, score second, then fit to budget — but
//! each component stands alone and assumes nothing about the others:
//!
//! ```
//! use satchel::{Entity, FitOptions, Satchel, SatchelConfig};
//!
//! let satchel = Satchel::new(SatchelConfig::default());
//! let fitter = satchel.create_fitter();
//!
//! let candidates = vec![
//!     Entity::new().with("id", 1).with("text", "Buy groceries"),
//!     Entity::new().with("id", 2).with("text", "Review the quarterly report"),
//! ];
//!
//! let result = fitter.fit_to_budget(&candidates, 100, &FitOptions::default());
//! assert!(result.tokens_used <= 100);
//! ```
//!
//! Everything is synchronous and pure: no I/O, no shared state, results
//! are freshly constructed from explicit inputs.

pub mod config;
pub mod factory;

pub use config::SatchelConfig;
pub use factory::Satchel;

pub use satchel_core::{
    constants, ConfigError, Entity, FitResult, InputError, MultiFitResult, RejectReason,
    RejectedEntity, SatchelError, SatchelResult, SourceAllocation,
};

pub use satchel_budget::{BudgetFitter, FitOptions};
pub use satchel_dedupe::{
    dedupe_by_field, dedupe_by_id, dedupe_with_merge, filter_by_ids, partition_by_field,
    KeepPolicy,
};
pub use satchel_scoring::{
    add_priority_boost, combine_scores, combine_scores_into, normalize_scores,
    normalize_scores_into, score_by_recency, score_by_recency_with, score_by_similarity,
    score_by_similarity_with, BoostMode, RecencyOptions, SimilarityOptions,
};
pub use satchel_tokens::{TokenEstimator, TokenizerModel};
