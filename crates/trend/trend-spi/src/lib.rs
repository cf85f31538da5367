//! Trend Service Provider Interface
//!
//! Defines the model, error and contract types shared by every trend
//! estimator implementation:
//!
//! - [`TrendFit`]: Fitted line plus the one-step-ahead extrapolation
//! - [`TrendEstimator`]: The contract an estimator implements
//! - [`TrendError`]: Standardized error type for estimator operations
//! - [`Result`]: Convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TrendEstimator;
pub use error::{Result, TrendError};
pub use model::TrendFit;
