//! Error types for ledger operations

mod ledger_error;

pub use ledger_error::{LedgerError, Result};
