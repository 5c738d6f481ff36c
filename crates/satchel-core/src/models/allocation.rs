use serde::{Deserialize, Serialize};

use super::fit_result::FitResult;

/// Aggregate result of fitting multiple sources under one global budget.
///
/// Allocations are kept in source processing order — the order is an
/// observable part of the contract, because earlier sources drain the pool
/// available to later ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiFitResult {
    /// Per-source allocations in processing order.
    pub allocations: Vec<SourceAllocation>,
    /// Total tokens used across all sources. Never exceeds `total_budget`.
    pub total_tokens: usize,
    /// The global budget this allocation was computed against.
    pub total_budget: usize,
}

impl MultiFitResult {
    /// Look up a source's fit result by name.
    pub fn get(&self, source: &str) -> Option<&FitResult> {
        self.allocations
            .iter()
            .find(|a| a.source == source)
            .map(|a| &a.result)
    }
}

/// One source's share of a multi-source fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAllocation {
    /// Source name as given by the caller.
    pub source: String,
    /// The budget this source was actually fit against: the smaller of its
    /// own cap and what remained of the global pool when its turn came.
    pub budget: usize,
    pub result: FitResult,
}
