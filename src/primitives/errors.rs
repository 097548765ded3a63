//! Error types for HP filter operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during trend/cycle
//! decomposition, including input validation, parameter constraints, and
//! numerical solver failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required lengths).
//! * **Synchronous**: All errors are raised at the point of detection; nothing is retried.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty series, too few points, non-finite values.
//! 2. **Parameter validation**: Negative or non-finite smoothing parameter.
//! 3. **Collaborator boundaries**: Label/value count mismatches, paired-series mismatches.
//! 4. **Numerical failure**: Breakdown of the banded factorization.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for HP filter operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HpError {
    /// Input series is empty.
    EmptyInput,

    /// Number of points is below the minimum required for second-difference smoothing.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Smoothing parameter must be finite and non-negative.
    InvalidLambda(f64),

    /// Input data contains NaN or infinite values.
    NonFiniteValue(String),

    /// Log transform encountered a zero or negative value.
    NonPositiveValue {
        /// Index of the offending element.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Period labels must have the same number of elements as the values.
    MismatchedLabels {
        /// Number of period labels.
        labels: usize,
        /// Number of observations.
        values: usize,
    },

    /// Paired series must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the first series.
        a_len: usize,
        /// Number of elements in the second series.
        b_len: usize,
    },

    /// Numerical breakdown in the banded linear solve.
    SolverFailure(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidLambda(lambda) => {
                write!(
                    f,
                    "Invalid lambda: {lambda} (must be finite and non-negative)"
                )
            }
            Self::NonFiniteValue(s) => write!(f, "Non-finite value: {s}"),
            Self::NonPositiveValue { index, value } => {
                write!(
                    f,
                    "Non-positive value at index {index}: {value} (log transform requires strictly positive inputs)"
                )
            }
            Self::MismatchedLabels { labels, values } => {
                write!(
                    f,
                    "Label mismatch: {labels} period labels for {values} observations"
                )
            }
            Self::MismatchedInputs { a_len, b_len } => {
                write!(f, "Length mismatch: first series has {a_len} points, second has {b_len}")
            }
            Self::SolverFailure(msg) => write!(f, "Solver failure: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HpError {}
