//! Second-difference penalty and HP normal-equation construction.
//!
//! ## Purpose
//!
//! This module builds the banded normal matrix of the HP filter,
//! `A = I + λ·KᵗK`, where K is the (n−2)×n second-difference operator
//! whose row r carries the stencil `[1, −2, 1]` at columns r, r+1, r+2.
//! It also provides the second-difference application used by the
//! smoothness diagnostic.
//!
//! ## Design notes
//!
//! * **Row Accumulation**: `λ·KᵗK` is accumulated stencil row by stencil
//!   row into the three stored diagonals. The first and last two rows of A
//!   simply receive fewer contributions, which yields the reduced-order
//!   boundary coefficients of the standard formulation without any
//!   special-cased indices — endpoints are never smoothed against
//!   out-of-range neighbors.
//! * **Interior Pattern**: For n ≥ 5 the interior rows come out as
//!   `[λ, −4λ, 1+6λ, −4λ, λ]`; the first row is `[1+λ, −2λ, λ]` and the
//!   second `[−2λ, 1+5λ, −4λ, λ]`, mirrored at the tail.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The returned system is symmetric positive-definite for every λ ≥ 0
//!   (identity plus a positive-semidefinite penalty).
//! * `second_difference` returns a vector of length n − 2.
//!
//! ## Non-goals
//!
//! * This module does not solve the system (see `math::penta`).
//! * This module does not validate n or λ (handled by the engine's validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::penta::PentaSystem;

// ============================================================================
// Normal-Equation Construction
// ============================================================================

/// Build the banded HP normal matrix `I + λ·KᵗK` of dimension n.
pub fn build_normal_system<T: Float>(n: usize, lambda: T) -> PentaSystem<T> {
    let mut sys = PentaSystem::zeros(n);

    let two = T::one() + T::one();
    let four = two * two;

    // Each stencil row [1, -2, 1] at columns (r, r+1, r+2) contributes its
    // outer product, scaled by lambda, to the band.
    for r in 0..n.saturating_sub(2) {
        sys.d0[r] = sys.d0[r] + lambda;
        sys.d0[r + 1] = sys.d0[r + 1] + four * lambda;
        sys.d0[r + 2] = sys.d0[r + 2] + lambda;

        sys.d1[r] = sys.d1[r] - two * lambda;
        sys.d1[r + 1] = sys.d1[r + 1] - two * lambda;

        sys.d2[r] = sys.d2[r] + lambda;
    }

    // Identity term from the fidelity part of the objective.
    for i in 0..n {
        sys.d0[i] = sys.d0[i] + T::one();
    }

    sys
}

// ============================================================================
// Second Differences
// ============================================================================

/// Apply the second-difference operator: `(Ky)ᵣ = yᵣ − 2yᵣ₊₁ + yᵣ₊₂`.
///
/// Returns an empty vector for n < 3.
pub fn second_difference<T: Float>(y: &[T]) -> Vec<T> {
    let n = y.len();
    let mut out = Vec::with_capacity(n.saturating_sub(2));

    let two = T::one() + T::one();
    for r in 0..n.saturating_sub(2) {
        out.push(y[r] - two * y[r + 1] + y[r + 2]);
    }
    out
}

/// Sum of squared second differences — the penalty term of the HP
/// objective, and the smoothness measure reported in diagnostics.
///
/// Zero for any affine series, and monotonically non-increasing in λ when
/// evaluated on the fitted trend.
pub fn smoothness<T: Float>(y: &[T]) -> T {
    second_difference(y)
        .iter()
        .fold(T::zero(), |acc, &d| acc + d * d)
}
