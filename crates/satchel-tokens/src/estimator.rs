use std::fmt;
use std::sync::Arc;

use moka::sync::Cache;
use tiktoken_rs::CoreBPE;
use tracing::warn;

use satchel_core::constants::{APPROX_CHARS_PER_TOKEN, TOKEN_CACHE_CAPACITY};
use satchel_core::entity::{render_text, Entity};

use crate::model::TokenizerModel;

/// Estimates token costs for text and entities.
///
/// A total function over text: empty text costs 0, everything else costs at
/// least 1. Counting never fails — an absent or null field simply
/// contributes nothing.
#[derive(Clone)]
pub struct TokenEstimator {
    model: TokenizerModel,
    /// Present only when the exact encoder loaded successfully.
    encoder: Option<Arc<CoreBPE>>,
    /// Content-hash memoization of `count`. Purely an optimization:
    /// `count_cached(s) == count(s)` always holds.
    cache: Cache<[u8; 32], usize>,
}

impl TokenEstimator {
    /// Create an estimator for the given model.
    ///
    /// If the exact encoder cannot be constructed, the estimator falls back
    /// to the approximate heuristic rather than failing — `exact` changes
    /// accuracy, not semantics.
    pub fn new(model: TokenizerModel) -> Self {
        let encoder = match model {
            TokenizerModel::Approximate => None,
            TokenizerModel::Exact => match tiktoken_rs::cl100k_base() {
                Ok(bpe) => Some(Arc::new(bpe)),
                Err(err) => {
                    warn!(%err, "exact tokenizer unavailable, using approximate counting");
                    None
                }
            },
        };

        Self {
            model,
            encoder,
            cache: Cache::new(TOKEN_CACHE_CAPACITY),
        }
    }

    /// The model this estimator was configured with.
    pub fn model(&self) -> TokenizerModel {
        self.model
    }

    /// Count tokens in a string. Empty text is 0.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        match &self.encoder {
            Some(bpe) => bpe.encode_ordinary(text).len(),
            None => approximate_count(text),
        }
    }

    /// Count tokens with content-hash memoization. Same value as `count`.
    pub fn count_cached(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let key = *blake3::hash(text.as_bytes()).as_bytes();
        self.cache.get_with(key, || self.count(text))
    }

    /// Token cost of an entity: the sum of the costs of the textual
    /// renderings of the named fields present on it (all fields when
    /// `fields` is `None`). Absent and null fields contribute 0.
    pub fn count_for_entity(&self, entity: &Entity, fields: Option<&[String]>) -> usize {
        match fields {
            Some(names) => names
                .iter()
                .filter_map(|name| entity.get(name))
                .filter_map(render_text)
                .map(|text| self.count_cached(&text))
                .sum(),
            None => entity
                .fields()
                .values()
                .filter_map(render_text)
                .map(|text| self.count_cached(&text))
                .sum(),
        }
    }

    /// Per-entity costs in input order. Order preservation here is
    /// foundational: every downstream consumer walks these pairs in order.
    pub fn count_for_entities<'a>(
        &self,
        entities: &'a [Entity],
        fields: Option<&[String]>,
    ) -> Vec<(&'a Entity, usize)> {
        entities
            .iter()
            .map(|entity| (entity, self.count_for_entity(entity, fields)))
            .collect()
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new(TokenizerModel::Approximate)
    }
}

impl fmt::Debug for TokenEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenEstimator")
            .field("model", &self.model)
            .field("exact_loaded", &self.encoder.is_some())
            .finish()
    }
}

/// Approximate heuristic: ~4 characters per token for English text.
fn approximate_count(text: &str) -> usize {
    (text.chars().count() / APPROX_CHARS_PER_TOKEN).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_text_costs_nothing() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.count(""), 0);
        assert_eq!(estimator.count_cached(""), 0);
    }

    #[test]
    fn short_text_costs_at_least_one() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.count("a"), 1);
    }

    #[test]
    fn approximate_is_chars_over_four() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.count(&"x".repeat(40)), 10);
        assert_eq!(estimator.count(&"x".repeat(43)), 10);
    }

    #[test]
    fn entity_count_sums_named_fields_only() {
        let estimator = TokenEstimator::default();
        let entity = Entity::new()
            .with("text", "x".repeat(40))
            .with("status", "y".repeat(8));

        let fields = vec!["text".to_string()];
        assert_eq!(estimator.count_for_entity(&entity, Some(&fields)), 10);
        assert_eq!(estimator.count_for_entity(&entity, None), 12);
    }

    #[test]
    fn absent_and_null_fields_contribute_zero() {
        let estimator = TokenEstimator::default();
        let entity = Entity::new().with("note", json!(null));

        let fields = vec!["note".to_string(), "missing".to_string()];
        assert_eq!(estimator.count_for_entity(&entity, Some(&fields)), 0);
    }

    #[test]
    fn entity_batch_preserves_order() {
        let estimator = TokenEstimator::default();
        let entities = vec![
            Entity::new().with("id", 1).with("text", "x".repeat(4)),
            Entity::new().with("id", 2).with("text", "x".repeat(8)),
        ];

        let fields = vec!["text".to_string()];
        let costs = estimator.count_for_entities(&entities, Some(&fields));
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].0.number("id"), Some(1.0));
        assert_eq!(costs[0].1, 1);
        assert_eq!(costs[1].1, 2);
    }
}
