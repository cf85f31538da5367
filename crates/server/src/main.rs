//! # budget-server
//!
//! REST API for logging income and expense transactions and forecasting the
//! next expense from a user's spending trend.

use axum::{routing::get, Router};
use ledger_facade::{InMemoryRepository, TransactionRepository};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trend_facade::{LinearTrend, TrendEstimator};

mod config;
mod error;
mod routes;

use config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TransactionRepository>,
    estimator: Arc<dyn TrendEstimator>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn TransactionRepository>,
        estimator: Arc<dyn TrendEstimator>,
    ) -> Self {
        Self {
            repository,
            estimator,
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(LinearTrend::new()),
        )
    }
}

fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/transactions",
            get(routes::list_transactions).post(routes::create_transaction),
        )
        .route("/api/forecast", get(routes::forecast))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "budget_server=info,ledger_core=info,trend_core=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = AppState::new(
        Arc::new(InMemoryRepository::new()),
        Arc::new(LinearTrend::with_config(config.trend.clone())),
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "budget-server v{} listening on {} (non-finite forecast input: {})",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?,
        config.trend.non_finite
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
