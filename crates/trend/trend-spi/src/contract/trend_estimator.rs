//! Trend estimator trait
//!
//! Defines the interface the hosting application uses to turn an ordered
//! sequence of observations into a fitted trend.

use crate::error::Result;
use crate::model::TrendFit;

/// Common trait for trend estimators
///
/// An estimator is stateless: it reads the observations it is given and
/// returns a fresh fit every call. Implementations must be shareable across
/// request handlers, hence the `Send + Sync` bound.
///
/// # Example
///
/// ```rust,ignore
/// use trend_spi::TrendEstimator;
///
/// fn next_month<E: TrendEstimator>(estimator: &E, expenses: &[f64]) -> Option<f64> {
///     estimator
///         .estimate(expenses)
///         .ok()
///         .flatten()
///         .map(|fit| fit.predicted_next)
/// }
/// ```
pub trait TrendEstimator: Send + Sync {
    /// Short identifier of the estimator, used in logs and responses
    fn name(&self) -> &str;

    /// Fit a trend to index-ordered observations
    ///
    /// # Returns
    ///
    /// - `Ok(Some(fit))` when there are at least two observations
    /// - `Ok(None)` when there is not enough data to fit a line
    /// - `Err(TrendError)` when the estimator refuses the input
    fn estimate(&self, observations: &[f64]) -> Result<Option<TrendFit>>;
}
