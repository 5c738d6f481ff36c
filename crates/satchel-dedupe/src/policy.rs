use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use satchel_core::errors::ConfigError;

/// Which member of a duplicate group survives `dedupe_by_field`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepPolicy {
    /// Keep the first occurrence in input order.
    #[default]
    First,
    /// Keep the last occurrence (positions of survivors are preserved).
    Last,
}

impl FromStr for KeepPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(ConfigError::UnknownKeepPolicy {
                policy: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}
