//! Trend estimation error types

use thiserror::Error;

/// Result type alias for trend operations
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur while estimating a trend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// An observation is NaN or infinite
    #[error("Non-finite observation at position {index}: {value}")]
    NonFiniteObservation { index: usize, value: f64 },

    /// Every observation is finite but the fit overflowed
    #[error("Observations are too large to fit a finite trend")]
    NonFiniteFit,
}
