//! Wire types for the transaction endpoints.

use ledger_spi::{Period, Result, Transaction};
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Query string selecting a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    /// The user id, treating an empty value as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Query string of a forecast: a user plus an optional year and month.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQuery {
    pub user_id: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ForecastQuery {
    /// The user id, treating an empty value as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The requested period; absent parameters match everything.
    pub fn period(&self) -> Result<Period> {
        Period::new(self.year, self.month)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Body of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCreated {
    pub transaction: Transaction,
}

/// Body of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_query_empty_is_absent() {
        let query: UserQuery = serde_json::from_str(r#"{"userId":""}"#).unwrap();
        assert_eq!(query.user_id(), None);

        let query: UserQuery = serde_json::from_str(r#"{"userId":"user123"}"#).unwrap();
        assert_eq!(query.user_id(), Some("user123"));

        assert_eq!(UserQuery::default().user_id(), None);
    }

    #[test]
    fn test_forecast_query_period() {
        let query: ForecastQuery =
            serde_json::from_str(r#"{"userId":"user123","year":2024,"month":3}"#).unwrap();
        assert_eq!(query.user_id(), Some("user123"));
        assert_eq!(query.period().unwrap(), Period::new(Some(2024), Some(3)).unwrap());

        let query: ForecastQuery = serde_json::from_str(r#"{"userId":"user123"}"#).unwrap();
        assert_eq!(query.period().unwrap(), Period::all());

        let query: ForecastQuery = serde_json::from_str(r#"{"month":13}"#).unwrap();
        assert_eq!(query.user_id(), None);
        assert_eq!(query.period(), Err(ledger_spi::LedgerError::InvalidMonth));
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_value(ErrorBody::new("userId is required")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "userId is required" }));
    }

    #[test]
    fn test_empty_list_shape() {
        let json = serde_json::to_value(TransactionList {
            transactions: Vec::new(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "transactions": [] }));
    }
}
