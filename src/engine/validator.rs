//! Input validation for HP filter configuration and data.
//!
//! ## Purpose
//!
//! This module provides the precondition checks for the decomposition
//! engine: series length, finiteness of every observation, bounds on the
//! smoothing parameter, and label alignment.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the O(n)
//!   finiteness scan runs last.
//! * **Defensive Boundary**: Validation exists to reject malformed input
//!   before it reaches the solver, not to clean data for the caller.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not fill gaps, drop observations, or transform data.
//! * This module does not perform the decomposition itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HpError;

/// Minimum series length for second-difference smoothing.
///
/// The penalty is defined on interior second differences, so at least one
/// stencil row must exist.
pub const MIN_POINTS: usize = 3;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for HP filter configuration and input data.
///
/// Provides static methods returning `Result<(), HpError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a series for decomposition.
    pub fn validate_series<T: Float>(y: &[T]) -> Result<(), HpError> {
        // Check 1: Non-empty
        if y.is_empty() {
            return Err(HpError::EmptyInput);
        }

        // Check 2: Sufficient points for the second-difference penalty
        let n = y.len();
        if n < MIN_POINTS {
            return Err(HpError::TooFewPoints {
                got: n,
                min: MIN_POINTS,
            });
        }

        // Check 3: All values finite. Logs of non-positive raw data arrive
        // here as NaN or -inf and must never reach the solver.
        for (i, &v) in y.iter().enumerate() {
            if !v.is_finite() {
                return Err(HpError::NonFiniteValue(format!(
                    "y[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing parameter.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), HpError> {
        if !lambda.is_finite() || lambda < T::zero() {
            return Err(HpError::InvalidLambda(
                lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a collection of candidate smoothing parameters for a sweep.
    pub fn validate_lambdas<T: Float>(lambdas: &[T]) -> Result<(), HpError> {
        if lambdas.is_empty() {
            return Err(HpError::InvalidLambda(f64::NAN));
        }
        for &lambda in lambdas {
            Self::validate_lambda(lambda)?;
        }
        Ok(())
    }

    // ========================================================================
    // Collaborator Boundaries
    // ========================================================================

    /// Validate that period labels align with the observations.
    pub fn validate_labels(labels: &[String], values: usize) -> Result<(), HpError> {
        if labels.len() != values {
            return Err(HpError::MismatchedLabels {
                labels: labels.len(),
                values,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), HpError> {
        if let Some(param) = duplicate_param {
            return Err(HpError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
