//! Property-based tests for the linear trend fit.
//!
//! These tests use proptest to verify:
//! - Short inputs never produce a fit
//! - Finite inputs always produce finite fields
//! - The fit is deterministic
//! - Monotonic inputs slope in their own direction
//! - Exact lines are recovered

#![cfg(test)]

use proptest::prelude::*;

use crate::regression::linear_regression;

// =============================================================================
// Generators
// =============================================================================

/// Amounts in the range a ledger realistically holds
fn amount() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn series(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(amount(), min_len..64)
}

prop_compose! {
    /// Strictly increasing sequence built from positive steps
    fn increasing()(
        start in amount(),
        steps in prop::collection::vec(1.0..1_000.0f64, 1..32),
    ) -> Vec<f64> {
        let mut value = start;
        let mut out = vec![value];
        for step in steps {
            value += step;
            out.push(value);
        }
        out
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn short_input_is_absent(data in prop::collection::vec(amount(), 0..2)) {
        prop_assert!(linear_regression(&data).is_none());
    }

    #[test]
    fn finite_input_gives_finite_fit(data in series(2)) {
        let fit = linear_regression(&data).unwrap();
        prop_assert!(fit.slope.is_finite());
        prop_assert!(fit.intercept.is_finite());
        prop_assert!(fit.predicted_next.is_finite());
    }

    #[test]
    fn fit_is_deterministic(data in series(0)) {
        prop_assert_eq!(linear_regression(&data), linear_regression(&data));
    }

    #[test]
    fn increasing_input_slopes_upward(data in increasing()) {
        let fit = linear_regression(&data).unwrap();
        prop_assert!(fit.slope > 0.0);
    }

    #[test]
    fn decreasing_input_slopes_downward(mut data in increasing()) {
        data.reverse();
        let fit = linear_regression(&data).unwrap();
        prop_assert!(fit.slope < 0.0);
    }

    // A late jump can leave the line below the last point, so the
    // extrapolation ordering only holds for evenly spaced steps.
    #[test]
    fn even_steps_extrapolate_past_last(
        start in amount(),
        step in prop_oneof![-1_000.0..-1.0f64, 1.0..1_000.0f64],
        len in 2usize..64,
    ) {
        let data: Vec<f64> = (0..len).map(|i| start + step * i as f64).collect();
        let last = *data.last().unwrap();
        let fit = linear_regression(&data).unwrap();
        if step > 0.0 {
            prop_assert!(fit.predicted_next > last);
        } else {
            prop_assert!(fit.predicted_next < last);
        }
    }

    #[test]
    fn constant_input_is_flat(value in amount(), len in 2usize..64) {
        let fit = linear_regression(&vec![value; len]).unwrap();
        prop_assert!(fit.slope.abs() < 1e-5);
        prop_assert!((fit.predicted_next - value).abs() < 1e-5);
    }

    #[test]
    fn exact_line_is_recovered(
        slope in -1_000.0..1_000.0f64,
        intercept in amount(),
        len in 2usize..64,
    ) {
        let data: Vec<f64> = (1..=len).map(|i| slope * i as f64 + intercept).collect();
        let fit = linear_regression(&data).unwrap();
        let expected_next = slope * (len + 1) as f64 + intercept;
        prop_assert!((fit.slope - slope).abs() < 1e-6);
        prop_assert!((fit.predicted_next - expected_next).abs() < 1e-4);
    }
}
