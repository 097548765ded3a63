//! Time series container with optional period labels.
//!
//! ## Purpose
//!
//! This module provides the `TimeSeries` type: an ordered sequence of
//! observations, optionally tagged with period labels (e.g., "2000Q1") that
//! are carried through the decomposition unchanged.
//!
//! ## Design notes
//!
//! * **Positional Index**: Observations are indexed by position; labels are metadata only.
//! * **Validated Construction**: Label/value count mismatches are rejected at construction.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * When labels are present, their count equals the number of observations.
//!
//! ## Non-goals
//!
//! * This module does not parse dates or enforce label formats.
//! * This module does not fill gaps or handle missing observations.

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
use crate::primitives::errors::HpError;

// ============================================================================
// TimeSeries
// ============================================================================

/// An ordered, fully populated time series with optional period labels.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    /// Observations, indexed by position.
    pub values: Vec<T>,

    /// Optional period labels, index-aligned with `values`.
    pub labels: Option<Vec<String>>,
}

impl<T: Float> TimeSeries<T> {
    /// Create a series from bare values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            labels: None,
        }
    }

    /// Create a series with period labels.
    ///
    /// Fails with [`HpError::MismatchedLabels`] if the label count does not
    /// match the value count.
    pub fn with_labels(values: Vec<T>, labels: Vec<String>) -> Result<Self, HpError> {
        if labels.len() != values.len() {
            return Err(HpError::MismatchedLabels {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            values,
            labels: Some(labels),
        })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series contains no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Float> From<Vec<T>> for TimeSeries<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
