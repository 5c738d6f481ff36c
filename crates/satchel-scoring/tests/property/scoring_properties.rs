use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use proptest::prelude::*;
use satchel_core::entity::Entity;
use satchel_scoring::{
    combine_scores, score_by_recency_with, score_by_similarity, RecencyOptions,
};

// ── Recency: monotonically non-increasing in age, bounded ────────────────

proptest! {
    #[test]
    fn recency_monotone_in_age(
        age_a in 0i64..2000,
        age_b in 0i64..2000,
        decay_days in 1.0f64..365.0,
    ) {
        let now = Utc::now();
        let options = RecencyOptions {
            reference_time: Some(now),
            ..RecencyOptions::default()
        };
        let entities = vec![
            Entity::new().with("at", (now - Duration::days(age_a)).to_rfc3339()),
            Entity::new().with("at", (now - Duration::days(age_b)).to_rfc3339()),
        ];

        let scored = score_by_recency_with(&entities, "at", decay_days, &options).unwrap();
        let score_a = scored[0].number("recency_score").unwrap();
        let score_b = scored[1].number("recency_score").unwrap();

        if age_a < age_b {
            prop_assert!(score_a >= score_b, "{score_a} < {score_b}");
        }
        prop_assert!((0.0..=1.0).contains(&score_a));
        prop_assert!((0.0..=1.0).contains(&score_b));
    }
}

// ── Similarity: bounded, extremes map to the unit interval ends ──────────

proptest! {
    #[test]
    fn similarity_bounded_and_anchored(
        values in prop::collection::vec(-1e6f64..1e6, 1..50),
    ) {
        let entities: Vec<Entity> = values
            .iter()
            .map(|v| Entity::new().with("similarity", *v))
            .collect();

        let scored = score_by_similarity(&entities, "similarity");
        let scores: Vec<f64> = scored
            .iter()
            .map(|e| e.number("similarity_score").unwrap())
            .collect();

        for score in &scores {
            prop_assert!((0.0..=1.0).contains(score), "out of bounds: {score}");
        }

        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if hi > lo {
            let max_idx = values.iter().position(|v| *v == hi).unwrap();
            let min_idx = values.iter().position(|v| *v == lo).unwrap();
            prop_assert_eq!(scores[max_idx], 1.0);
            prop_assert_eq!(scores[min_idx], 0.0);
        } else {
            // All values equal: everything maps to 1.0.
            for score in &scores {
                prop_assert_eq!(*score, 1.0);
            }
        }
    }
}

// ── Combine: annotation only, never filters or reorders ──────────────────

proptest! {
    #[test]
    fn combine_preserves_order_and_membership(
        scores in prop::collection::vec(0.0f64..=1.0, 0..30),
        weight in 0.1f64..10.0,
    ) {
        let entities: Vec<Entity> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| Entity::new().with("id", i as u64).with("recency_score", *s))
            .collect();

        let weights: BTreeMap<String, f64> =
            [("recency_score".to_string(), weight)].into_iter().collect();
        let combined = combine_scores(&entities, &weights).unwrap();

        prop_assert_eq!(combined.len(), entities.len());
        for (i, entity) in combined.iter().enumerate() {
            prop_assert_eq!(entity.number("id"), Some(i as f64));
            // Single component with any positive weight: score == component.
            let got = entity.number("score").unwrap();
            prop_assert!((got - scores[i]).abs() < 1e-9);
        }
    }
}
