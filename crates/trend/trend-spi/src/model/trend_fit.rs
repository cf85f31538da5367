//! Fitted trend model

use serde::{Deserialize, Serialize};

/// A straight line fitted to index-ordered observations
///
/// The line is `value = slope * index + intercept`, where the first
/// observation sits at index 1. `predicted_next` is the line evaluated one
/// step past the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFit {
    /// Change per index step
    pub slope: f64,
    /// Value of the line at index 0
    pub intercept: f64,
    /// Line evaluated at index `n + 1`
    pub predicted_next: f64,
}

impl TrendFit {
    /// Build a fit from its line, extrapolating past `observations` points
    pub fn new(slope: f64, intercept: f64, observations: usize) -> Self {
        let next = (observations + 1) as f64;
        Self {
            slope,
            intercept,
            predicted_next: slope * next + intercept,
        }
    }

    /// Whether slope, intercept and prediction are all finite
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite() && self.predicted_next.is_finite()
    }

    /// Value of the fitted line at a 1-based index
    pub fn value_at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }

    /// Extrapolate `steps` values following the last of `observations` points
    ///
    /// The first projected value equals `predicted_next`.
    pub fn project(&self, observations: usize, steps: usize) -> Vec<f64> {
        (1..=steps)
            .map(|step| self.value_at((observations + step) as f64))
            .collect()
    }

    /// Differences between each observation and the fitted line
    pub fn residuals(&self, observations: &[f64]) -> Vec<f64> {
        observations
            .iter()
            .enumerate()
            .map(|(i, &y)| y - self.value_at((i + 1) as f64))
            .collect()
    }
}
