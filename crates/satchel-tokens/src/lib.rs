//! # satchel-tokens
//!
//! Token cost estimation for entities and text. Two models: a deterministic
//! offline heuristic (`approximate`) and tiktoken's `cl100k_base`
//! (`exact`). Counts are memoized through a content-hash cache.

pub mod estimator;
pub mod model;
pub mod template;

pub use estimator::TokenEstimator;
pub use model::TokenizerModel;
