//! Linear trend regression
//!
//! Fits `value = slope * index + intercept` to a sequence of observations
//! by ordinary least squares, with the first observation at index 1, and
//! extrapolates one step past the last observation.
//!
//! ## When to Use
//!
//! - Spending that drifts steadily up or down
//! - Short histories where a richer model would overfit
//! - When the slope itself is worth showing to the user

use crate::validation::ensure_finite;
use trend_api::{NonFinitePolicy, TrendConfig};
use trend_spi::{Result, TrendError, TrendEstimator, TrendFit};

/// Fewest observations that determine a line
pub const MIN_OBSERVATIONS: usize = 2;

/// Least-squares line through index-ordered observations
///
/// Returns `None` when fewer than [`MIN_OBSERVATIONS`] values are given.
/// This is the expected "not enough data" signal, not a failure.
///
/// Indices are always `1..=n`, so for `n >= 2` the index spread is strictly
/// positive and the slope division is well defined. Non-finite observations
/// are not checked here: NaN or inf flows through the arithmetic into the
/// result. Use [`LinearTrend`] with [`NonFinitePolicy::Reject`] to refuse
/// them instead.
///
/// # Example
///
/// ```rust
/// use trend_core::regression::linear_regression;
///
/// let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((fit.slope - 1.0).abs() < 1e-9);
/// assert!(fit.intercept.abs() < 1e-9);
/// assert!((fit.predicted_next - 6.0).abs() < 1e-9);
/// ```
pub fn linear_regression(observations: &[f64]) -> Option<TrendFit> {
    let n = observations.len();
    if n < MIN_OBSERVATIONS {
        return None;
    }

    let count = n as f64;
    // Mean of 1..=n
    let mean_x = (count + 1.0) / 2.0;
    let mean_y = observations.iter().sum::<f64>() / count;

    let (numerator, denominator) = observations.iter().enumerate().fold(
        (0.0, 0.0),
        |(num, den), (i, &y)| {
            let dx = (i + 1) as f64 - mean_x;
            (num + dx * (y - mean_y), den + dx * dx)
        },
    );

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    Some(TrendFit::new(slope, intercept, n))
}

/// Trend estimator backed by [`linear_regression`]
///
/// Under [`NonFinitePolicy::Reject`] both the observations and the fitted
/// line must be finite. Finite values near `f64::MAX` can still overflow the
/// sums, which is reported as [`TrendError::NonFiniteFit`].
///
/// # Example
///
/// ```rust
/// use trend_core::prelude::*;
///
/// let estimator = LinearTrend::new();
/// let fit = estimator.estimate(&[400.0, 300.0, 200.0, 100.0]).unwrap().unwrap();
/// assert!(fit.predicted_next < 100.0);
///
/// assert!(estimator.estimate(&[100.0, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearTrend {
    config: TrendConfig,
}

impl LinearTrend {
    /// Create an estimator that rejects non-finite observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator from configuration
    pub fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Get the configured non-finite policy
    pub fn policy(&self) -> NonFinitePolicy {
        self.config.non_finite
    }
}

impl TrendEstimator for LinearTrend {
    fn name(&self) -> &str {
        "linear"
    }

    fn estimate(&self, observations: &[f64]) -> Result<Option<TrendFit>> {
        if self.config.non_finite == NonFinitePolicy::Reject {
            if let Err(e) = ensure_finite(observations) {
                tracing::warn!(error = %e, "rejecting observations");
                return Err(e);
            }
        }

        let fit = linear_regression(observations);
        if self.config.non_finite == NonFinitePolicy::Reject
            && fit.as_ref().is_some_and(|fit| !fit.is_finite())
        {
            tracing::warn!(
                observations = observations.len(),
                "rejecting trend fit that overflowed"
            );
            return Err(TrendError::NonFiniteFit);
        }

        match &fit {
            Some(fit) => tracing::debug!(
                observations = observations.len(),
                slope = fit.slope,
                intercept = fit.intercept,
                predicted_next = fit.predicted_next,
                "fitted linear trend"
            ),
            None => tracing::debug!(
                observations = observations.len(),
                "not enough observations for a trend"
            ),
        }
        Ok(fit)
    }
}
