use std::collections::BTreeMap;

use proptest::prelude::*;
use satchel_budget::{BudgetFitter, FitOptions};
use satchel_core::entity::Entity;
use satchel_tokens::TokenEstimator;

fn candidates_strategy() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((0usize..40, 0.0f64..=1.0), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (cost, score))| {
                Entity::new()
                    .with("id", i as u64)
                    .with("text", "x".repeat(cost * 4))
                    .with("score", score)
            })
            .collect()
    })
}

fn options(sort: bool, min_score: Option<f64>) -> FitOptions {
    FitOptions {
        token_fields: Some(vec!["text".to_string()]),
        min_score,
        sort_by_score: sort,
        score_field: "score".to_string(),
    }
}

proptest! {
    // ── Hard-fit invariant ───────────────────────────────────────────────

    #[test]
    fn selection_never_exceeds_budget(
        candidates in candidates_strategy(),
        max_tokens in 0usize..200,
        sort in any::<bool>(),
    ) {
        let fitter = BudgetFitter::new(TokenEstimator::default());
        let result = fitter.fit_to_budget(&candidates, max_tokens, &options(sort, None));

        prop_assert!(result.tokens_used <= max_tokens);
        prop_assert_eq!(result.tokens_used + result.tokens_remaining, max_tokens);

        let text_fields = vec!["text".to_string()];
        let recounted: usize = result
            .selected
            .iter()
            .map(|e| fitter.estimator().count_for_entity(e, Some(&text_fields)))
            .sum();
        prop_assert_eq!(recounted, result.tokens_used);
    }

    // ── Selection and rejection partition the candidates ─────────────────

    #[test]
    fn every_candidate_lands_exactly_once(
        candidates in candidates_strategy(),
        max_tokens in 0usize..100,
        min_score in prop::option::of(0.0f64..=1.0),
    ) {
        let fitter = BudgetFitter::new(TokenEstimator::default());
        let result = fitter.fit_to_budget(&candidates, max_tokens, &options(true, min_score));

        prop_assert_eq!(result.selected.len() + result.rejected.len(), candidates.len());

        let mut seen: Vec<u64> = result
            .selected
            .iter()
            .chain(result.rejected.iter().map(|r| &r.entity))
            .map(|e| e.number("id").unwrap() as u64)
            .collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (0..candidates.len() as u64).collect();
        prop_assert_eq!(seen, expected);
    }

    // ── Determinism ──────────────────────────────────────────────────────

    #[test]
    fn repeated_runs_are_identical(
        candidates in candidates_strategy(),
        max_tokens in 0usize..200,
    ) {
        let fitter = BudgetFitter::new(TokenEstimator::default());
        let opts = options(true, Some(0.3));
        let first = fitter.fit_to_budget(&candidates, max_tokens, &opts);
        let second = fitter.fit_to_budget(&candidates, max_tokens, &opts);
        prop_assert_eq!(first, second);
    }

    // ── Multi-source global bound ────────────────────────────────────────

    #[test]
    fn multi_source_respects_total_budget(
        costs_a in prop::collection::vec(0usize..30, 0..15),
        costs_b in prop::collection::vec(0usize..30, 0..15),
        cap_a in 0usize..200,
        cap_b in prop::option::of(0usize..200),
        total_budget in 0usize..150,
    ) {
        let build = |name: &str, costs: &[usize]| {
            (
                name.to_string(),
                costs
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Entity::new().with("id", i as u64).with("text", "x".repeat(c * 4))
                    })
                    .collect::<Vec<Entity>>(),
            )
        };
        let sources = vec![build("a", &costs_a), build("b", &costs_b)];

        let mut budgets: BTreeMap<String, usize> = BTreeMap::new();
        budgets.insert("a".to_string(), cap_a);
        if let Some(cap) = cap_b {
            budgets.insert("b".to_string(), cap);
        }

        let fitter = BudgetFitter::new(TokenEstimator::default());
        let result =
            fitter.fit_multiple_sources(&sources, &budgets, total_budget, &options(false, None));

        prop_assert!(
            result.total_tokens <= total_budget,
            "{} > {}",
            result.total_tokens,
            total_budget
        );

        let summed: usize = result
            .allocations
            .iter()
            .map(|a| a.result.tokens_used)
            .sum();
        prop_assert_eq!(summed, result.total_tokens);

        for allocation in &result.allocations {
            prop_assert!(allocation.result.tokens_used <= allocation.budget);
        }
    }
}
