//! Observation checks

use trend_spi::{Result, TrendError};

/// Fail on the first NaN or infinite observation
///
/// The reported index is 1-based, matching the index the value would have
/// been fitted at.
pub fn ensure_finite(observations: &[f64]) -> Result<()> {
    match observations.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(TrendError::NonFiniteObservation {
            index: i + 1,
            value: observations[i],
        }),
        None => Ok(()),
    }
}
