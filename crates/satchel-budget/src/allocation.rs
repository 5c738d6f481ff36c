//! Multi-source allocation: several candidate lists, per-source caps, one
//! global budget that the combined selection must never exceed.

use std::collections::BTreeMap;

use tracing::{debug, info};

use satchel_core::entity::Entity;
use satchel_core::models::{MultiFitResult, SourceAllocation};

use crate::fitter::BudgetFitter;
use crate::options::FitOptions;

impl BudgetFitter {
    /// Fit several sources under per-source caps and one global budget.
    ///
    /// Sources are processed in the order given — an observable part of
    /// the contract, because tokens consumed by an earlier source shrink
    /// the pool left for later ones. A source with an entry in `budgets`
    /// gets that cap; sources without one split evenly whatever remains of
    /// `total_budget` after all explicit caps are subtracted. Each source
    /// is then fit against `min(its cap, unconsumed total budget)`, so the
    /// combined consumption can never exceed `total_budget` even when the
    /// caps sum to more.
    pub fn fit_multiple_sources(
        &self,
        sources: &[(String, Vec<Entity>)],
        budgets: &BTreeMap<String, usize>,
        total_budget: usize,
        options: &FitOptions,
    ) -> MultiFitResult {
        let explicit_total: usize = sources
            .iter()
            .filter_map(|(name, _)| budgets.get(name))
            .sum();
        let unbudgeted = sources
            .iter()
            .filter(|(name, _)| !budgets.contains_key(name))
            .count();
        let even_share = if unbudgeted > 0 {
            total_budget.saturating_sub(explicit_total) / unbudgeted
        } else {
            0
        };

        let mut allocations: Vec<SourceAllocation> = Vec::with_capacity(sources.len());
        let mut total_tokens = 0usize;

        for (name, candidates) in sources {
            let cap = budgets.get(name).copied().unwrap_or(even_share);
            let available = cap.min(total_budget.saturating_sub(total_tokens));

            debug!(
                source = %name,
                cap,
                available,
                candidates = candidates.len(),
                "allocating source budget"
            );

            let result = self.fit_to_budget(candidates, available, options);
            total_tokens += result.tokens_used;

            allocations.push(SourceAllocation {
                source: name.clone(),
                budget: available,
                result,
            });
        }

        info!(
            sources = allocations.len(),
            total_tokens, total_budget, "multi-source fit complete"
        );

        MultiFitResult {
            allocations,
            total_tokens,
            total_budget,
        }
    }
}
