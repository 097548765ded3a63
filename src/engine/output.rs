//! Output types and result structures for HP filter operations.
//!
//! ## Purpose
//!
//! This module defines the `HpResult` struct which encapsulates the outputs
//! of a decomposition: the trend and cycle components, the smoothing
//! parameter used, any period labels carried through from the input, and
//! optional diagnostics.
//!
//! ## Design notes
//!
//! * **Index Alignment**: Trend and cycle are index-aligned with the input;
//!   the original series is recoverable as their elementwise sum.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `trend.len() == cycle.len()` equals the input length.
//! * `trend[i] + cycle[i]` reproduces the input within floating-point rounding.
//! * Labels, when present, have the same length as the components.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a trend/cycle decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct HpResult<T> {
    /// Smooth trend component.
    pub trend: Vec<T>,

    /// Residual cyclical component (input − trend).
    pub cycle: Vec<T>,

    /// Smoothing parameter used for this decomposition.
    pub lambda: T,

    /// Period labels carried through from the input, if supplied.
    pub labels: Option<Vec<String>>,

    /// Summary diagnostics (cycle volatility, trend smoothness), if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> HpResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of observations in the decomposition.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Reconstruct the original series as `trend + cycle`.
    pub fn reconstruct(&self) -> Vec<T> {
        self.trend
            .iter()
            .zip(self.cycle.iter())
            .map(|(&t, &c)| t + c)
            .collect()
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for HpResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Lambda:      {}", self.lambda)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Decomposition:")?;
        writeln!(
            f,
            "{:>10} {:>14} {:>14} {:>14}",
            "Period", "Observed", "Trend", "Cycle"
        )?;
        writeln!(f, "{:-<55}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            match &self.labels {
                Some(labels) => write!(f, "{:>10}", labels[idx])?,
                None => write!(f, "{:>10}", idx)?,
            }

            let observed = self.trend[idx] + self.cycle[idx];
            writeln!(
                f,
                " {:>14.6} {:>14.6} {:>14.6}",
                observed, self.trend[idx], self.cycle[idx]
            )?;
        }

        Ok(())
    }
}
