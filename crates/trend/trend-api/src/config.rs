//! Trend configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an estimator does with NaN or infinite observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Refuse the whole sequence with `TrendError::NonFiniteObservation`.
    #[default]
    Reject,
    /// Fit anyway and let IEEE arithmetic carry NaN/inf into the result.
    Propagate,
}

impl fmt::Display for NonFinitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonFinitePolicy::Reject => write!(f, "reject"),
            NonFinitePolicy::Propagate => write!(f, "propagate"),
        }
    }
}

impl FromStr for NonFinitePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(NonFinitePolicy::Reject),
            "propagate" => Ok(NonFinitePolicy::Propagate),
            other => Err(format!(
                "unknown non-finite policy '{}', expected 'reject' or 'propagate'",
                other
            )),
        }
    }
}

/// Trend estimator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Handling of NaN/inf observations.
    #[serde(default)]
    pub non_finite: NonFinitePolicy,
}

impl TrendConfig {
    pub fn new(non_finite: NonFinitePolicy) -> Self {
        Self { non_finite }
    }

    pub fn propagating() -> Self {
        Self::new(NonFinitePolicy::Propagate)
    }
}
