//! Transaction models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse the wire spelling (`income` / `expense`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// `txn_` followed by digits.
    pub id: String,
    pub description: String,
    /// Strictly positive amount; the kind carries the sign.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub category: String,
    pub user_id: String,
}

impl Transaction {
    /// Attach an id to a validated draft.
    pub fn from_draft(id: String, draft: TransactionDraft) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            date: draft.date,
            category: draft.category,
            user_id: draft.user_id,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub category: String,
    pub user_id: String,
}

/// Unvalidated create request as sent by clients.
///
/// Every field is optional so that validation, not deserialization, decides
/// which error the client sees. `amount` stays a raw JSON value because a
/// non-numeric amount is an amount error, not a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: Option<String>,
    pub amount: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub user_id: Option<String>,
}
