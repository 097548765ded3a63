#![cfg(feature = "dev")]
//! White-box tests for the banded system construction and LDLᵀ solver.
//!
//! The boundary rows of `I + λ·KᵗK` are the classic source of off-by-one
//! bugs in HP implementations, so the band is pinned against hand-computed
//! coefficients for small n.
//!
//! ## Test Organization
//!
//! 1. **Band Construction** - Hand-computed diagonals for n = 3 and n = 5
//! 2. **Solver** - Residual checks and pivot-failure detection

use approx::assert_relative_eq;

use hpfilter::internals::algorithms::penalty::{build_normal_system, second_difference, smoothness};
use hpfilter::internals::math::penta::PentaSystem;
use hpfilter::internals::primitives::errors::HpError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Multiply a symmetric pentadiagonal system by a vector.
fn multiply(sys: &PentaSystem<f64>, x: &[f64]) -> Vec<f64> {
    let n = sys.dim();
    let mut out = vec![0.0; n];
    for i in 0..n {
        let mut acc = sys.d0[i] * x[i];
        if i >= 1 {
            acc += sys.d1[i - 1] * x[i - 1];
        }
        if i >= 2 {
            acc += sys.d2[i - 2] * x[i - 2];
        }
        if i + 1 < n {
            acc += sys.d1[i] * x[i + 1];
        }
        if i + 2 < n {
            acc += sys.d2[i] * x[i + 2];
        }
        out[i] = acc;
    }
    out
}

// ============================================================================
// Band Construction Tests
// ============================================================================

/// Test the hand-computed band for n = 5.
///
/// The boundary rows carry reduced-order coefficients: first row
/// [1+λ, −2λ, λ], second [−2λ, 1+5λ, −4λ, λ], interior [λ, −4λ, 1+6λ, −4λ, λ].
#[test]
fn test_band_n5() {
    let lambda = 2.0;
    let sys = build_normal_system::<f64>(5, lambda);

    assert_eq!(sys.d0, vec![3.0, 11.0, 13.0, 11.0, 3.0]);
    assert_eq!(sys.d1, vec![-4.0, -8.0, -8.0, -4.0]);
    assert_eq!(sys.d2, vec![2.0, 2.0, 2.0]);
}

/// Test the hand-computed band for the minimal n = 3.
///
/// A single stencil row contributes its full outer product:
/// KᵗK = [[1, −2, 1], [−2, 4, −2], [1, −2, 1]].
#[test]
fn test_band_n3() {
    let lambda = 10.0;
    let sys = build_normal_system::<f64>(3, lambda);

    assert_eq!(sys.d0, vec![11.0, 41.0, 11.0]);
    assert_eq!(sys.d1, vec![-20.0, -20.0]);
    assert_eq!(sys.d2, vec![10.0]);
}

/// Test symmetry of the interior pattern for a larger system.
#[test]
fn test_band_is_symmetric_pattern() {
    let n = 12;
    let lambda = 1600.0;
    let sys = build_normal_system::<f64>(n, lambda);

    for i in 0..n {
        assert_relative_eq!(sys.d0[i], sys.d0[n - 1 - i], epsilon = 1e-12);
    }
    // Interior main diagonal is 1 + 6λ.
    for i in 2..n - 2 {
        assert_relative_eq!(sys.d0[i], 1.0 + 6.0 * lambda, epsilon = 1e-9);
    }
}

// ============================================================================
// Solver Tests
// ============================================================================

/// Test the solve against the residual of the original system.
///
/// Verifies `A·x ≈ rhs` on an HP normal matrix, which exercises all five
/// diagonals including the boundary rows.
#[test]
fn test_solve_residual() {
    let n = 40;
    let sys = build_normal_system::<f64>(n, 1600.0);
    let rhs: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin() + 0.01 * i as f64).collect();

    let x = sys.solve(&rhs).expect("SPD system must factor");
    let back = multiply(&sys, &x);

    for i in 0..n {
        assert_relative_eq!(back[i], rhs[i], max_relative = 1e-9, epsilon = 1e-9);
    }
}

/// Test a diagonal system solves exactly.
#[test]
fn test_solve_diagonal_system() {
    let mut sys = PentaSystem::<f64>::zeros(4);
    sys.d0 = vec![2.0, 4.0, 8.0, 16.0];

    let x = sys.solve(&[2.0, 4.0, 8.0, 16.0]).expect("diagonal SPD");
    for &v in &x {
        assert_relative_eq!(v, 1.0, epsilon = 1e-14);
    }
}

/// Test pivot-failure detection.
///
/// An indefinite matrix must abort with `SolverFailure` rather than
/// returning corrupted output.
#[test]
fn test_solve_rejects_indefinite_system() {
    let mut sys = PentaSystem::<f64>::zeros(3);
    sys.d0 = vec![1.0, -1.0, 1.0];

    let err = sys.solve(&[1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, HpError::SolverFailure(_)));
}

/// Test the empty system edge case.
#[test]
fn test_solve_empty_system() {
    let sys = PentaSystem::<f64>::zeros(0);
    assert_eq!(sys.solve(&[]).expect("empty solve"), Vec::<f64>::new());
}

// ============================================================================
// Second-Difference Tests
// ============================================================================

/// Test the second-difference stencil on a known sequence.
#[test]
fn test_second_difference_values() {
    let y = [1.0, 2.0, 4.0, 7.0, 11.0];
    // y_r - 2*y_{r+1} + y_{r+2}
    assert_eq!(second_difference(&y), vec![1.0, 1.0, 1.0]);

    let affine = [3.0, 5.0, 7.0, 9.0];
    assert_eq!(second_difference(&affine), vec![0.0, 0.0]);
}

/// Test smoothness of short and affine series.
#[test]
fn test_smoothness_values() {
    assert_eq!(smoothness(&[1.0, 2.0]), 0.0);
    assert_eq!(smoothness(&[0.0, 1.0, 2.0, 3.0]), 0.0);
    assert_relative_eq!(smoothness(&[0.0, 0.0, 1.0]), 1.0, epsilon = 1e-14);
}
