//! In-memory transaction storage

use crate::id::IdGenerator;
use ledger_spi::{LedgerError, Result, Transaction, TransactionDraft, TransactionRepository};
use std::sync::RwLock;

/// Transaction store held entirely in memory
///
/// Contents are lost when the process exits. Construct one per application
/// and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    transactions: RwLock<Vec<Transaction>>,
    ids: IdGenerator,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions across all users
    pub fn len(&self) -> Result<usize> {
        Ok(self.transactions.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl TransactionRepository for InMemoryRepository {
    fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        let transaction = Transaction::from_draft(self.ids.next_id(), draft);

        self.transactions
            .write()
            .map_err(poisoned)?
            .push(transaction.clone());

        tracing::debug!(
            id = %transaction.id,
            user_id = %transaction.user_id,
            kind = %transaction.kind,
            "stored transaction"
        );
        Ok(transaction)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().map_err(poisoned)?;
        Ok(transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> LedgerError {
    LedgerError::Storage("transaction store lock poisoned".to_string())
}
