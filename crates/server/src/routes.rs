//! API route handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use ledger_facade::{
    expense_series_in, validate, ForecastQuery, NewTransaction, TransactionCreated,
    TransactionList, UserQuery,
};
use serde::Serialize;
use trend_facade::TrendFit;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub model: String,
    /// Number of expenses in the period the trend was fitted to
    pub observations: usize,
    /// `null` when there are fewer than two expenses
    pub forecast: Option<TrendFit>,
}

fn require_user(user_id: Option<&str>) -> Result<String, ApiError> {
    user_id.map(str::to_string).ok_or(ApiError::MissingUserId)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "API is healthy",
    })
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<TransactionList>, ApiError> {
    let user_id = require_user(query.user_id())?;
    let transactions = state.repository.list_for_user(&user_id)?;

    Ok(Json(TransactionList { transactions }))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionCreated>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let draft = validate(request)?;
    let transaction = state.repository.insert(draft)?;

    tracing::info!(id = %transaction.id, kind = %transaction.kind, "transaction created");
    Ok((StatusCode::CREATED, Json(TransactionCreated { transaction })))
}

pub async fn forecast(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let user_id = require_user(query.user_id())?;
    let period = query.period()?;
    let history = state.repository.list_for_user(&user_id)?;
    let series = expense_series_in(&history, period);
    let forecast = state.estimator.estimate(&series)?;

    Ok(Json(ForecastResponse {
        user_id,
        year: period.year(),
        month: period.month(),
        model: state.estimator.name().to_string(),
        observations: series.len(),
        forecast,
    }))
}
