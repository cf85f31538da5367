//! Data models for the ledger.

mod period;
mod transaction;

pub use period::*;
pub use transaction::*;
