//! Transaction Ledger Facade
//!
//! Unified re-exports for the ledger module:
//! - `validation` - Create-request checks (`validate`)
//! - `repository` - In-memory storage (`InMemoryRepository`)
//! - `series` - Chronological expense amounts (`expense_series`, `expense_series_in`)
//! - wire types - `UserQuery`, `ForecastQuery`, `TransactionCreated`, `TransactionList`, `ErrorBody`

// Re-export everything from SPI (traits, errors, types)
pub use ledger_spi::*;

// Re-export everything from API (wire types)
pub use ledger_api::*;

// Re-export everything from Core (implementations)
pub use ledger_core::*;
