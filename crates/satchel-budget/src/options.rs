use serde::{Deserialize, Serialize};

use satchel_core::constants::SCORE_FIELD;

/// Options for a single fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Fields to include in token costing. `None` costs all fields.
    pub token_fields: Option<Vec<String>>,
    /// Entities scoring below this are rejected before budget accounting
    /// and reported as score-rejected, not budget-rejected.
    pub min_score: Option<f64>,
    /// Stable-sort candidates descending by score before the walk. Ties
    /// keep original input order, so repeated calls are deterministic.
    pub sort_by_score: bool,
    /// Field read for sorting and the min-score cutoff. Entities missing
    /// it read as 0.0.
    pub score_field: String,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            token_fields: None,
            min_score: None,
            sort_by_score: false,
            score_field: SCORE_FIELD.to_string(),
        }
    }
}
