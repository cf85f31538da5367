//! Trend Facade
//!
//! High-level API for trend estimation. Re-exports all public types from the
//! trend stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use trend_facade::prelude::*;
//!
//! let estimator = LinearTrend::new();
//! match estimator.estimate(&[120.0, 135.5, 150.0]).unwrap() {
//!     Some(fit) => assert!(fit.predicted_next > 150.0),
//!     None => unreachable!("three observations always fit"),
//! }
//! ```

// Re-export everything from core (includes implementations)
pub use trend_core::*;

// Re-export from API for completeness (overlaps with core re-exports)
#[allow(unused_imports)]
pub use trend_api::*;

// Explicit re-exports for documentation
pub use trend_core::prelude;
pub use trend_core::validation;
