//! Transaction Ledger Service Provider Interface
//!
//! Defines the transaction model, the ledger error type and the repository
//! contract that storage backends implement.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;
