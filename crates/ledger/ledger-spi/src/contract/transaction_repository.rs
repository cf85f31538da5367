//! Transaction repository trait.

use crate::error::Result;
use crate::model::{Transaction, TransactionDraft};

/// Storage for user transactions.
///
/// Handlers share one repository, so implementations synchronize
/// internally and take `&self`.
pub trait TransactionRepository: Send + Sync {
    /// Store a validated transaction and return it with its assigned id.
    fn insert(&self, draft: TransactionDraft) -> Result<Transaction>;

    /// All transactions of a user, in insertion order.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Transaction>>;
}
