//! Create-request validation
//!
//! Checks run in a fixed order and the first failure wins: missing fields,
//! then the transaction type, then the amount, then the date.

use chrono::NaiveDate;
use ledger_spi::{LedgerError, NewTransaction, Result, TransactionDraft, TransactionKind};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a raw create request
///
/// An amount of `0` counts as present for the missing-field check and is
/// then refused as non-positive.
pub fn validate(request: NewTransaction) -> Result<TransactionDraft> {
    let NewTransaction {
        description,
        amount,
        kind,
        date,
        category,
        user_id,
    } = request;

    let (Some(description), Some(amount), Some(kind), Some(date), Some(category), Some(user_id)) = (
        non_empty(description),
        amount,
        non_empty(kind),
        non_empty(date),
        non_empty(category),
        non_empty(user_id),
    ) else {
        return Err(LedgerError::MissingFields);
    };

    let kind = TransactionKind::parse(&kind).ok_or(LedgerError::InvalidKind)?;
    let amount = positive_amount(&amount)?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate)?;

    Ok(TransactionDraft {
        description,
        amount,
        kind,
        date,
        category,
        user_id,
    })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

fn positive_amount(amount: &Value) -> Result<f64> {
    match amount.as_f64() {
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(LedgerError::NonPositiveAmount),
    }
}
