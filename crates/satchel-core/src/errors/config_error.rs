/// Configuration errors. These fail the whole call synchronously — unlike
/// per-entity data anomalies, which degrade to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported tokenizer model: {model}")]
    UnsupportedTokenizer { model: String },

    #[error("decay_days must be positive, got {decay_days}")]
    NonPositiveDecay { decay_days: f64 },

    #[error("score weights are empty or sum to zero")]
    DegenerateWeights,

    #[error("weight for {name} is negative: {weight}")]
    NegativeWeight { name: String, weight: f64 },

    #[error("unrecognized keep policy: {policy}")]
    UnknownKeepPolicy { policy: String },
}
