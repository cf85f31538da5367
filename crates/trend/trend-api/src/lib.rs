//! Trend Consumer API
//!
//! Consumer-facing configuration for trend estimation, plus re-exports of
//! the SPI model, contract and error types.

mod config;

pub use config::{NonFinitePolicy, TrendConfig};

// Re-export all SPI types
pub use trend_spi::{Result, TrendError, TrendEstimator, TrendFit};
