//! End-to-end tests for trend estimation
//!
//! Tests complete forecasting workflows using only this crate's API.

use proptest::prelude::*;
use trend_facade::prelude::*;

/// Twelve months of rent-plus-utilities with a slow upward drift
fn monthly_expenses() -> Vec<f64> {
    (0..12)
        .map(|m| 1_450.0 + 12.5 * m as f64 + if m % 2 == 0 { 8.0 } else { -8.0 })
        .collect()
}

#[test]
fn e2e_monthly_forecast_workflow() {
    let data = monthly_expenses();
    let estimator = LinearTrend::new();

    let fit = estimator.estimate(&data).unwrap().unwrap();

    assert!((fit.slope - 12.5).abs() < 2.0, "slope {} off the drift", fit.slope);
    assert!(fit.predicted_next > data[0]);

    let projection = fit.project(data.len(), 3);
    assert_eq!(projection[0], fit.predicted_next);
    assert!(projection[2] > projection[1]);
}

#[test]
fn e2e_growing_history() {
    // The forecast becomes available once the second observation arrives
    let data = monthly_expenses();
    let estimator = LinearTrend::new();

    for len in 0..=data.len() {
        let fit = estimator.estimate(&data[..len]).unwrap();
        assert_eq!(fit.is_some(), len >= MIN_OBSERVATIONS, "len {}", len);
    }
}

#[test]
fn e2e_backtest_last_month() {
    // Fit on all but the last month and check the miss is small
    let data = monthly_expenses();
    let (history, actual) = data.split_at(data.len() - 1);

    let fit = linear_regression(history).unwrap();
    let error = (fit.predicted_next - actual[0]).abs();
    assert!(error < 30.0, "forecast missed by {}", error);
}

proptest! {
    #[test]
    fn e2e_residuals_balance(data in prop::collection::vec(0.0..10_000.0f64, 2..50)) {
        let fit = linear_regression(&data).unwrap();
        let total: f64 = fit.residuals(&data).iter().sum();
        prop_assert!(total.abs() < 1e-6);
    }
}
