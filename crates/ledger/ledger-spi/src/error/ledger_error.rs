//! Ledger error types.

use thiserror::Error;

/// Ledger errors.
///
/// The display strings of the validation variants are returned verbatim to
/// API clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Type must be \"income\" or \"expense\"")]
    InvalidKind,

    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Date must be formatted as YYYY-MM-DD")]
    InvalidDate,

    #[error("Month must be between 1 and 12")]
    InvalidMonth,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Whether the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        !matches!(self, LedgerError::Storage(_))
    }
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
