use satchel_budget::BudgetFitter;
use satchel_tokens::TokenEstimator;

use crate::config::SatchelConfig;

/// Factory for configured component instances.
///
/// This is the collaborator surface a host wires against: it calls
/// `create_estimator` and `create_fitter` and receives fully initialized,
/// stateless instances. How the host discovers this type is its own
/// business.
#[derive(Debug, Clone, Default)]
pub struct Satchel {
    config: SatchelConfig,
}

impl Satchel {
    pub fn new(config: SatchelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SatchelConfig {
        &self.config
    }

    /// Create a token estimator with the configured tokenizer.
    pub fn create_estimator(&self) -> TokenEstimator {
        TokenEstimator::new(self.config.tokenizer_model)
    }

    /// Create a budget fitter backed by a freshly configured estimator.
    pub fn create_fitter(&self) -> BudgetFitter {
        BudgetFitter::new(self.create_estimator())
    }

    /// Create a budget fitter around a caller-supplied estimator.
    pub fn create_fitter_with(&self, estimator: TokenEstimator) -> BudgetFitter {
        BudgetFitter::new(estimator)
    }
}
