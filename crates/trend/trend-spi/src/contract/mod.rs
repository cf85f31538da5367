//! Contract traits for trend estimators

mod trend_estimator;

pub use trend_estimator::TrendEstimator;
