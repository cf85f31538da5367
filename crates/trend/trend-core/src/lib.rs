//! Trend Core Implementations
//!
//! Ordinary least-squares trend fitting over index-ordered observations.
//!
//! - [`regression`]: The closed-form fit and the [`LinearTrend`] estimator
//! - [`validation`]: Input checks used by the rejecting policy
//!
//! ## Example
//!
//! ```rust
//! use trend_core::prelude::*;
//!
//! let fit = linear_regression(&[100.0, 150.0, 200.0, 250.0, 300.0]).unwrap();
//! assert!((fit.predicted_next - 350.0).abs() < 1e-9);
//!
//! assert!(linear_regression(&[100.0]).is_none());
//! ```

pub mod regression;
pub mod validation;

#[cfg(test)]
mod properties;

// Re-export from SPI/API
pub use trend_api::{NonFinitePolicy, TrendConfig};
pub use trend_spi::{Result, TrendError, TrendEstimator, TrendFit};

// Re-export implementations for convenience
pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::regression::{linear_regression, LinearTrend, MIN_OBSERVATIONS};
    pub use trend_api::{NonFinitePolicy, TrendConfig};
    pub use trend_spi::{Result, TrendError, TrendEstimator, TrendFit};
}
