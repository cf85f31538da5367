//! Error types for trend estimation
//!
//! Insufficient data is not an error: estimators report it as an absent
//! fit. [`TrendError`] covers the inputs an estimator refuses to fit.

mod trend_error;

pub use trend_error::{Result, TrendError};
