use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use satchel_core::errors::ConfigError;

/// The recognized tokenizer models.
///
/// `Approximate` is the default: fast, offline, reproducible. `Exact` is an
/// accuracy extension backed by tiktoken's `cl100k_base` encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerModel {
    #[default]
    Approximate,
    Exact,
}

impl FromStr for TokenizerModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approximate" => Ok(Self::Approximate),
            "exact" => Ok(Self::Exact),
            other => Err(ConfigError::UnsupportedTokenizer {
                model: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TokenizerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approximate => write!(f, "approximate"),
            Self::Exact => write!(f, "exact"),
        }
    }
}
