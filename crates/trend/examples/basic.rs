//! Basic example fitting a spending trend
//!
//! Run with: cargo run --example basic -p trend-facade

use trend_facade::{LinearTrend, TrendEstimator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Monthly grocery spending, oldest first
    let expenses = vec![412.30, 398.75, 441.10, 455.00, 470.25, 468.90];

    println!("=== Spending Trend ===\n");
    println!("Observations: {:?}\n", expenses);

    let estimator = LinearTrend::new();
    match estimator.estimate(&expenses)? {
        Some(fit) => {
            println!("Slope:          {:>8.2} per month", fit.slope);
            println!("Intercept:      {:>8.2}", fit.intercept);
            println!("Next month:     {:>8.2}", fit.predicted_next);
            println!("Next quarter:   {:?}", fit.project(expenses.len(), 3));
        }
        None => println!("Not enough data for a forecast"),
    }

    // A single month is not enough to draw a line
    println!("\nOne observation: {:?}", estimator.estimate(&[412.30])?);

    // Non-finite input is refused under the default policy
    if let Err(e) = estimator.estimate(&[412.30, f64::NAN]) {
        println!("Rejected: {}", e);
    }

    Ok(())
}
