//! Tests for diagnostics, cross-series comparison, and the log transform.
//!
//! ## Test Organization
//!
//! 1. **Diagnostics** - Cycle volatility, amplitude, smoothness, variance ratio
//! 2. **Cycle Correlation** - Comovement of two cyclical components
//! 3. **Log Transform** - Guarded elementwise natural log

use approx::assert_relative_eq;

use hpfilter::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn cyclical_series(n: usize, phase: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            0.05 * t + 0.3 * (t * 0.5 + phase).sin()
        })
        .collect()
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

/// Test diagnostics on a zero-cycle decomposition.
///
/// λ = 0 makes the cycle identically zero, so all cycle-based metrics must
/// vanish while the trend smoothness equals that of the input.
#[test]
fn test_diagnostics_zero_cycle() {
    let y = cyclical_series(40, 0.0);
    let res = Hp::new()
        .lambda(0.0)
        .return_diagnostics()
        .build()
        .unwrap()
        .decompose(&y)
        .unwrap();

    let diag = res.diagnostics.expect("diagnostics requested");
    assert_relative_eq!(diag.cycle_sd, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diag.cycle_amplitude, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diag.variance_ratio, 0.0, epsilon = 1e-12);
    assert!(diag.trend_smoothness > 0.0, "input is not affine");
}

/// Test diagnostics on a smoothed decomposition.
///
/// With a positive λ the cycle picks up the sinusoidal component, so its
/// volatility is positive and the variance ratio stays within [0, 1].
#[test]
fn test_diagnostics_positive_lambda() {
    let y = cyclical_series(80, 0.0);
    let res = Hp::new()
        .lambda(1600.0)
        .return_diagnostics()
        .build()
        .unwrap()
        .decompose(&y)
        .unwrap();

    let diag = res.diagnostics.expect("diagnostics requested");
    assert!(diag.cycle_sd > 0.0);
    assert!(diag.cycle_amplitude >= diag.cycle_sd);
    assert!(diag.variance_ratio > 0.0 && diag.variance_ratio <= 1.0);
}

/// Test that trend smoothness shrinks as λ grows.
#[test]
fn test_diagnostics_smoothness_ordering() {
    let y = cyclical_series(80, 0.0);
    let build = |lambda: f64| {
        Hp::new()
            .lambda(lambda)
            .return_diagnostics()
            .build()
            .unwrap()
            .decompose(&y)
            .unwrap()
            .diagnostics
            .unwrap()
    };

    let loose = build(10.0);
    let tight = build(1600.0);
    assert!(tight.trend_smoothness <= loose.trend_smoothness);
}

// ============================================================================
// Cycle Correlation Tests
// ============================================================================

/// Test self-correlation.
///
/// A non-constant cycle correlated with itself must give exactly 1.
#[test]
fn test_cycle_self_correlation() {
    let y = cyclical_series(60, 0.0);
    let res = Hp::new().lambda(1600.0).build().unwrap().decompose(&y).unwrap();

    let r = cycle_correlation(&res.cycle, &res.cycle).expect("lengths match");
    assert_relative_eq!(r, 1.0, epsilon = 1e-12);
}

/// Test correlation of phase-shifted cycles.
///
/// Two series sharing a trend but with opposite cyclical phases must
/// produce negatively correlated cycles.
#[test]
fn test_opposite_phase_cycles_negatively_correlated() {
    let a = cyclical_series(100, 0.0);
    let b = cyclical_series(100, core::f64::consts::PI);

    let filter = Hp::new().lambda(1600.0).build().unwrap();
    let res_a = filter.decompose(&a).unwrap();
    let res_b = filter.decompose(&b).unwrap();

    let r = cycle_correlation(&res_a.cycle, &res_b.cycle).expect("lengths match");
    assert!(r < -0.9, "opposite phases should anticorrelate, got {}", r);
}

/// Test length mismatch rejection.
#[test]
fn test_correlation_length_mismatch() {
    let err = cycle_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, HpError::MismatchedInputs { a_len: 3, b_len: 2 });
}

/// Test zero-variance correlation.
#[test]
fn test_correlation_zero_variance() {
    let flat = vec![0.0; 10];
    let wavy: Vec<f64> = (0..10).map(|i| (i as f64).sin()).collect();
    let r = cycle_correlation(&flat, &wavy).expect("lengths match");
    assert_relative_eq!(r, 0.0, epsilon = 1e-12);
}

// ============================================================================
// Log Transform Tests
// ============================================================================

/// Test the log transform on positive levels.
#[test]
fn test_ln_series_positive() {
    let levels = vec![1.0, core::f64::consts::E, 100.0];
    let logged = ln_series(&levels).expect("all positive");

    assert_relative_eq!(logged[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(logged[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(logged[2], 100.0_f64.ln(), epsilon = 1e-12);
}

/// Test rejection of zero and negative levels.
///
/// Verifies the guard fires at the offending index instead of emitting
/// −inf or NaN into the pipeline.
#[test]
fn test_ln_series_rejects_non_positive() {
    let err = ln_series(&[1.0, 0.0, 2.0]).unwrap_err();
    assert_eq!(err, HpError::NonPositiveValue { index: 1, value: 0.0 });

    let err = ln_series(&[1.0, -3.0]).unwrap_err();
    assert_eq!(err, HpError::NonPositiveValue { index: 1, value: -3.0 });
}

/// Test rejection of non-finite levels.
#[test]
fn test_ln_series_rejects_non_finite() {
    let err = ln_series(&[1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, HpError::NonPositiveValue { index: 1, .. }));
}

/// Test the log-then-filter workflow end to end.
///
/// Mirrors the standard usage: log GDP levels, then decompose.
#[test]
fn test_log_then_filter_workflow() {
    let levels: Vec<f64> = (0..40).map(|i| 100.0 * (1.02_f64).powi(i)).collect();
    let logged = ln_series(&levels).expect("positive levels");

    // Log of constant-growth levels is exactly affine, so the trend is the
    // input and the cycle vanishes.
    let res = Hp::new().lambda(1600.0).build().unwrap().decompose(&logged).unwrap();
    for i in 0..logged.len() {
        assert_relative_eq!(res.trend[i], logged[i], epsilon = 1e-6);
        assert_relative_eq!(res.cycle[i], 0.0, epsilon = 1e-6);
    }
}
