use serde::{Deserialize, Serialize};

use satchel_tokens::TokenizerModel;

/// The recognized configuration surface.
///
/// Hosts pass `{tokenizer_model: "approximate" | "exact"}`; anything else
/// fails deserialization. Missing keys fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SatchelConfig {
    /// Tokenizer backing every estimator this configuration creates.
    pub tokenizer_model: TokenizerModel,
}
