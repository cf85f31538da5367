//! Trait contracts for the ledger.

mod transaction_repository;

pub use transaction_repository::*;
