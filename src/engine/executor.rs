//! Execution engine for trend/cycle decomposition.
//!
//! ## Purpose
//!
//! This module orchestrates a single decomposition: the λ = 0 shortcut,
//! construction of the banded normal system, the O(n) solve for the trend,
//! and the residual cycle. It is the central component coordinating the
//! lower-level algorithm and math layers.
//!
//! ## Design notes
//!
//! * **Pure Function**: The executor holds no state; every invocation is
//!   independent, so concurrent callers need no synchronization.
//! * **λ = 0 Shortcut**: A zero penalty makes the normal matrix the
//!   identity, so the trend is the input itself; the solve is skipped.
//! * **Exact Reconstruction**: The cycle is computed as `y − trend`, so
//!   `trend + cycle` reproduces the input to floating-point rounding by
//!   construction.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input is assumed validated (length ≥ 3, finite values, λ ≥ 0).
//! * `trend` and `cycle` both have the same length as the input.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not compute diagnostics (handled by `evaluation`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
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
use crate::algorithms::penalty::build_normal_system;
use crate::primitives::errors::HpError;

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output from a decomposition run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Smooth trend component.
    pub trend: Vec<T>,

    /// Residual cyclical component (input − trend).
    pub cycle: Vec<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless execution engine for HP decompositions.
pub struct HpExecutor;

impl HpExecutor {
    /// Decompose a validated series under the given smoothing parameter.
    pub fn run<T: Float>(y: &[T], lambda: T) -> Result<ExecutorOutput<T>, HpError> {
        let n = y.len();

        // Zero penalty: the normal matrix degenerates to the identity.
        if lambda == T::zero() {
            return Ok(ExecutorOutput {
                trend: y.to_vec(),
                cycle: vec![T::zero(); n],
            });
        }

        let system = build_normal_system(n, lambda);
        let trend = system.solve(y)?;

        let cycle: Vec<T> = y
            .iter()
            .zip(trend.iter())
            .map(|(&yi, &ti)| yi - ti)
            .collect();

        Ok(ExecutorOutput { trend, cycle })
    }
}
