//! Data models for trend estimation

mod trend_fit;

pub use trend_fit::TrendFit;
