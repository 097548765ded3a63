//! Scalar reductions over series.
//!
//! ## Purpose
//!
//! This module provides the small set of statistical reductions used by the
//! evaluation layer: mean, sample variance and standard deviation, and
//! Pearson correlation. These are reusable building blocks with no
//! filter-specific logic.
//!
//! ## Design notes
//!
//! * **Sample Statistics**: Variance and standard deviation use the n − 1
//!   denominator.
//! * **Degenerate Inputs**: Empty or single-element slices reduce to zero
//!   rather than NaN; correlation of a zero-variance series is zero.
//! * **Generics**: All computations are generic over `Float` types.

// External dependencies
use num_traits::Float;

/// Arithmetic mean of a slice. Zero for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n == 0 {
        return T::zero();
    }
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    sum / T::from(n).unwrap_or(T::one())
}

/// Sample variance (n − 1 denominator). Zero for fewer than 2 elements.
pub fn variance<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }
    let m = mean(values);
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let dv = v - m;
        acc + dv * dv
    });
    ss / T::from(n - 1).unwrap_or(T::one())
}

/// Sample standard deviation (n − 1 denominator).
pub fn std_dev<T: Float>(values: &[T]) -> T {
    variance(values).sqrt()
}

/// Pearson correlation of two equal-length slices.
///
/// Returns zero when either series has zero variance. Callers are expected
/// to validate lengths; mismatches are a debug-time error.
pub fn correlation<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "correlation: length mismatch");

    let n = a.len();
    if n < 2 {
        return T::zero();
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cov = T::zero();
    let mut var_a = T::zero();
    let mut var_b = T::zero();

    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov = cov + da * db;
        var_a = var_a + da * da;
        var_b = var_b + db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom <= T::zero() {
        return T::zero();
    }
    cov / denom
}
