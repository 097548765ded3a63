//! Log transform for level series.
//!
//! ## Purpose
//!
//! Callers of the HP filter almost always work with logarithms of raw
//! levels (log GDP, log capital stock). Taking `ln` of a zero or negative
//! raw value silently produces −inf or NaN, which would otherwise surface
//! only as a validation failure deep inside the engine. This module makes
//! the transform explicit and fails at the offending element instead.
//!
//! ## Non-goals
//!
//! * This module does not drop or impute bad observations; cleaning the
//!   data is the caller's responsibility.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HpError;

/// Elementwise natural log of a level series.
///
/// Fails with [`HpError::NonPositiveValue`] at the first element that is
/// zero, negative, or non-finite.
pub fn ln_series<T: Float>(values: &[T]) -> Result<Vec<T>, HpError> {
    let mut out = Vec::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() || v <= T::zero() {
            return Err(HpError::NonPositiveValue {
                index: i,
                value: v.to_f64().unwrap_or(f64::NAN),
            });
        }
        out.push(v.ln());
    }
    Ok(out)
}
