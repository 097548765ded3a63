//! Symmetric pentadiagonal systems and their banded factorization.
//!
//! ## Purpose
//!
//! This module provides banded storage for symmetric pentadiagonal matrices
//! and a direct solver based on the LDLᵀ factorization specialized to
//! bandwidth 2. This is the numerical core of the HP filter: the normal
//! matrix `I + λ·KᵗK` is symmetric positive-definite with exactly five
//! nonzero diagonals, so the factorization and both triangular solves run
//! in O(n) time and O(n) memory.
//!
//! ## Design notes
//!
//! * **Banded Storage**: Only the main diagonal and two superdiagonals are
//!   stored; symmetry supplies the subdiagonals.
//! * **No Pivoting**: Positive-definiteness guarantees strictly positive
//!   pivots, so no row interchanges are needed. A non-positive or
//!   non-finite pivot signals a malformed system and aborts the solve.
//! * **Sequential Recurrence**: Each pivot depends on the previous two, so
//!   the factorization is inherently serial.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `d0.len() == n`, `d1.len() == n - 1`, `d2.len() == n - 2` (saturating at zero).
//! * A successful solve returns a vector of length n.
//!
//! ## Non-goals
//!
//! * This module does not construct the HP penalty band (see `algorithms::penalty`).
//! * This module does not handle general banded matrices or pivoted factorizations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HpError;

// ============================================================================
// Pentadiagonal System
// ============================================================================

/// A symmetric pentadiagonal matrix in banded storage.
///
/// Row i of the full matrix reads
/// `[…, d2[i-2], d1[i-1], d0[i], d1[i], d2[i], …]`; entries outside the
/// band are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PentaSystem<T> {
    /// Main diagonal (offset 0), length n.
    pub d0: Vec<T>,

    /// First superdiagonal (offset +1), length n - 1.
    pub d1: Vec<T>,

    /// Second superdiagonal (offset +2), length n - 2.
    pub d2: Vec<T>,
}

impl<T: Float> PentaSystem<T> {
    /// Create a zero-initialized system of dimension n.
    pub fn zeros(n: usize) -> Self {
        Self {
            d0: vec![T::zero(); n],
            d1: vec![T::zero(); n.saturating_sub(1)],
            d2: vec![T::zero(); n.saturating_sub(2)],
        }
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.d0.len()
    }

    /// Solve `A·x = rhs` via banded LDLᵀ factorization.
    ///
    /// Fails with [`HpError::SolverFailure`] if a pivot is non-positive or
    /// non-finite, which indicates the system is not positive-definite.
    pub fn solve(&self, rhs: &[T]) -> Result<Vec<T>, HpError> {
        let n = self.dim();
        debug_assert_eq!(rhs.len(), n, "PentaSystem::solve: rhs dimension mismatch");

        if n == 0 {
            return Ok(Vec::new());
        }

        // Factorization: A = L·D·Lᵀ with unit lower L carrying two
        // subdiagonals. l1[i] sits at (i, i-1), l2[i] at (i, i-2).
        let mut d = vec![T::zero(); n];
        let mut l1 = vec![T::zero(); n];
        let mut l2 = vec![T::zero(); n];

        for i in 0..n {
            if i >= 2 {
                l2[i] = self.d2[i - 2] / d[i - 2];
            }
            if i >= 1 {
                let mut e1 = self.d1[i - 1];
                if i >= 2 {
                    // Fill-in from the column eliminated two rows earlier.
                    e1 = e1 - l2[i] * l1[i - 1] * d[i - 2];
                }
                l1[i] = e1 / d[i - 1];
            }

            let mut pivot = self.d0[i];
            if i >= 1 {
                pivot = pivot - l1[i] * l1[i] * d[i - 1];
            }
            if i >= 2 {
                pivot = pivot - l2[i] * l2[i] * d[i - 2];
            }

            if !pivot.is_finite() || pivot <= T::zero() {
                return Err(HpError::SolverFailure(format!(
                    "non-positive pivot at row {} ({})",
                    i,
                    pivot.to_f64().unwrap_or(f64::NAN)
                )));
            }
            d[i] = pivot;
        }

        // Forward substitution: L·z = rhs.
        let mut x = rhs.to_vec();
        for i in 0..n {
            if i >= 1 {
                x[i] = x[i] - l1[i] * x[i - 1];
            }
            if i >= 2 {
                x[i] = x[i] - l2[i] * x[i - 2];
            }
        }

        // Diagonal scaling: D·w = z.
        for i in 0..n {
            x[i] = x[i] / d[i];
        }

        // Back substitution: Lᵀ·x = w.
        for i in (0..n).rev() {
            if i + 1 < n {
                x[i] = x[i] - l1[i + 1] * x[i + 1];
            }
            if i + 2 < n {
                x[i] = x[i] - l2[i + 2] * x[i + 2];
            }
        }

        Ok(x)
    }
}
