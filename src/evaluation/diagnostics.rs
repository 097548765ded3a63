//! Diagnostic metrics for trend/cycle decompositions.
//!
//! ## Purpose
//!
//! This module provides summary statistics for assessing a decomposition:
//! the volatility and amplitude of the cyclical component, the smoothness
//! of the fitted trend, and the share of variance assigned to the cycle.
//! It also provides the cross-series cycle correlation used to compare
//! business cycles across countries.
//!
//! ## Design notes
//!
//! * **Cycle-based**: Volatility metrics are computed from the cycle
//!   (y − trend), which is mean-zero up to boundary effects.
//! * **Smoothness**: The trend smoothness is the HP penalty term itself,
//!   the sum of squared second differences; it shrinks as λ grows.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `cycle_sd`, `cycle_amplitude`, and `trend_smoothness` are non-negative.
//! * `variance_ratio` is in [0, 1] for any λ ≥ 0 decomposition.
//!
//! ## Non-goals
//!
//! * This module does not perform the decomposition itself.
//! * This module does not compute growth-accounting shares or other
//!   derived macro aggregates.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::penalty::smoothness;
use crate::math::stats::{correlation, std_dev, variance};
use crate::primitives::errors::HpError;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary statistics for a trend/cycle decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Sample standard deviation of the cyclical component.
    pub cycle_sd: T,

    /// Largest absolute cyclical deviation.
    pub cycle_amplitude: T,

    /// Sum of squared second differences of the trend.
    pub trend_smoothness: T,

    /// Var(cycle) / Var(input) — the share of variance assigned to the cycle.
    pub variance_ratio: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from a decomposition.
    pub fn compute(y: &[T], trend: &[T], cycle: &[T]) -> Self {
        let cycle_sd = std_dev(cycle);

        let cycle_amplitude = cycle
            .iter()
            .fold(T::zero(), |acc, &c| acc.max(c.abs()));

        let trend_smoothness = smoothness(trend);

        let var_y = variance(y);
        let variance_ratio = if var_y > T::zero() {
            variance(cycle) / var_y
        } else {
            T::zero()
        };

        Diagnostics {
            cycle_sd,
            cycle_amplitude,
            trend_smoothness,
            variance_ratio,
        }
    }
}

// ============================================================================
// Cross-Series Comparison
// ============================================================================

/// Pearson correlation of two cyclical components.
///
/// This is the standard comovement measure when comparing business cycles
/// across countries. Fails with [`HpError::MismatchedInputs`] if the series
/// lengths differ; a zero-variance series yields zero correlation.
pub fn cycle_correlation<T: Float>(a: &[T], b: &[T]) -> Result<T, HpError> {
    if a.len() != b.len() {
        return Err(HpError::MismatchedInputs {
            a_len: a.len(),
            b_len: b.len(),
        });
    }
    Ok(correlation(a, b))
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decomposition Diagnostics:")?;
        writeln!(f, "  Cycle SD:         {:.6}", self.cycle_sd)?;
        writeln!(f, "  Cycle Amplitude:  {:.6}", self.cycle_amplitude)?;
        writeln!(f, "  Trend Smoothness: {:.6}", self.trend_smoothness)?;
        writeln!(f, "  Variance Ratio:   {:.6}", self.variance_ratio)?;
        Ok(())
    }
}
