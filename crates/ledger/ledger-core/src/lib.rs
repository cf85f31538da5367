//! Transaction Ledger Core Implementations
//!
//! - [`validation`]: Turns a raw create request into a [`TransactionDraft`]
//! - [`id`]: Monotonic `txn_` identifiers
//! - [`repository`]: In-memory [`TransactionRepository`]
//! - [`series`]: Expense amounts in chronological order, optionally limited to a
//!   [`Period`], ready for trend fitting
//!
//! ## Example
//!
//! ```rust
//! use ledger_core::prelude::*;
//!
//! let repo = InMemoryRepository::new();
//! let request = NewTransaction {
//!     description: Some("Rent".to_string()),
//!     amount: Some(serde_json::json!(1200.0)),
//!     kind: Some("expense".to_string()),
//!     date: Some("2024-02-01".to_string()),
//!     category: Some("Housing".to_string()),
//!     user_id: Some("user123".to_string()),
//! };
//!
//! let stored = repo.insert(validate(request).unwrap()).unwrap();
//! assert!(stored.id.starts_with("txn_"));
//!
//! let history = repo.list_for_user("user123").unwrap();
//! assert_eq!(expense_series(&history), vec![1200.0]);
//! ```

pub mod id;
pub mod repository;
pub mod series;
pub mod validation;

// Re-export from SPI/API
pub use ledger_api::*;

// Re-export implementations for convenience
pub use id::IdGenerator;
pub use repository::InMemoryRepository;
pub use series::{expense_series, expense_series_in};
pub use validation::validate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::id::IdGenerator;
    pub use crate::repository::InMemoryRepository;
    pub use crate::series::{expense_series, expense_series_in};
    pub use crate::validation::validate;
    pub use ledger_spi::{
        LedgerError, NewTransaction, Period, Result, Transaction, TransactionDraft, TransactionKind,
        TransactionRepository,
    };
}
