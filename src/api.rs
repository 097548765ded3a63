//! High-level API for HP filter decomposition.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the HP
//! filter. It implements a fluent builder pattern for configuring the
//! smoothing parameter and optional outputs, producing an immutable
//! processor whose `decompose` methods are pure functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless Processing**: The built processor holds configuration only;
//!   it retains no reference to inputs or outputs between calls.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`HpBuilder`] via `Hp::new()`.
//! 2. Chain configuration methods (`.lambda()`, `.return_diagnostics()`).
//! 3. Call `.build()` to obtain an [`HpFilter`] processor.
//! 4. Call `.decompose()` per series, or `.sweep()` for several λ values.

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
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::HpExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;

// Publicly re-exported types
pub use crate::engine::output::HpResult;
pub use crate::evaluation::diagnostics::cycle_correlation;
pub use crate::math::transform::ln_series;
pub use crate::primitives::errors::HpError;
pub use crate::primitives::series::TimeSeries;

// ============================================================================
// Conventional Smoothing Parameters
// ============================================================================

/// Conventional λ for quarterly macro data (Hodrick & Prescott).
pub const LAMBDA_QUARTERLY: f64 = 1600.0;

/// Conventional λ for annual data.
pub const LAMBDA_ANNUAL: f64 = 100.0;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an HP filter.
#[derive(Debug, Clone)]
pub struct HpBuilder<T> {
    /// Smoothing parameter (λ ≥ 0).
    pub lambda: Option<T>,

    /// Whether to compute summary diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for HpBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HpBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            lambda: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing parameter λ.
    pub fn lambda(mut self, lambda: T) -> Self {
        if self.lambda.is_some() {
            self.duplicate_param = Some("lambda");
        }
        self.lambda = Some(lambda);
        self
    }

    /// Enable summary diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Build the processor, validating the configuration.
    pub fn build(self) -> Result<HpFilter<T>, HpError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Default: conventional quarterly smoothing
        let lambda = self
            .lambda
            .unwrap_or_else(|| T::from(LAMBDA_QUARTERLY).unwrap());

        Validator::validate_lambda(lambda)?;

        Ok(HpFilter {
            lambda,
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured HP filter processor.
///
/// Holds configuration only; each `decompose` call is an independent,
/// stateless computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HpFilter<T> {
    lambda: T,
    return_diagnostics: bool,
}

impl<T: Float> HpFilter<T> {
    /// The configured smoothing parameter.
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Decompose a series into trend and cycle components.
    pub fn decompose(&self, y: &[T]) -> Result<HpResult<T>, HpError> {
        self.run(y, self.lambda, None)
    }

    /// Decompose a labeled series, carrying the period labels through.
    pub fn decompose_series(&self, series: &TimeSeries<T>) -> Result<HpResult<T>, HpError> {
        if let Some(labels) = &series.labels {
            Validator::validate_labels(labels, series.len())?;
        }
        self.run(&series.values, self.lambda, series.labels.clone())
    }

    /// Decompose one series under several λ values, in input order.
    ///
    /// Each decomposition is independent; the processor's own λ is not
    /// used. This mirrors the common workflow of comparing trends at
    /// λ = 10, 100, and 1600 on the same series.
    pub fn sweep(&self, y: &[T], lambdas: &[T]) -> Result<Vec<HpResult<T>>, HpError> {
        Validator::validate_lambdas(lambdas)?;

        let mut results = Vec::with_capacity(lambdas.len());
        for &lambda in lambdas {
            results.push(self.run(y, lambda, None)?);
        }
        Ok(results)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn run(
        &self,
        y: &[T],
        lambda: T,
        labels: Option<Vec<String>>,
    ) -> Result<HpResult<T>, HpError> {
        Validator::validate_series(y)?;
        Validator::validate_lambda(lambda)?;

        let output = HpExecutor::run(y, lambda)?;

        let diagnostics = if self.return_diagnostics {
            Some(Diagnostics::compute(y, &output.trend, &output.cycle))
        } else {
            None
        };

        Ok(HpResult {
            trend: output.trend,
            cycle: output.cycle,
            lambda,
            labels,
            diagnostics,
        })
    }
}
