//! # hpfilter — Hodrick–Prescott Trend/Cycle Decomposition for Rust
//!
//! A small, fast, and careful implementation of the Hodrick–Prescott (HP)
//! filter: the standard econometric technique for separating a
//! macroeconomic time series into a smooth **trend** and a residual
//! **cycle**.
//!
//! ## What is the HP filter?
//!
//! Given a series `y` of length n and a smoothing parameter λ ≥ 0, the HP
//! filter finds the trend τ minimizing
//!
//! ```text
//! Σᵢ (yᵢ − τᵢ)² + λ · Σᵢ ((τᵢ₊₁ − τᵢ) − (τᵢ − τᵢ₋₁))²
//! ```
//!
//! and reports the cycle `c = y − τ`. Larger λ produces a smoother trend;
//! λ = 0 reproduces the input exactly, and λ → ∞ approaches the best-fit
//! line. The minimizer solves the pentadiagonal linear system
//! `(I + λ·KᵗK)·τ = y`, which this crate factors in O(n) time and O(n)
//! memory — never a dense solve.
//!
//! ## Quick Start
//!
//! ```rust
//! use hpfilter::prelude::*;
//!
//! let log_gdp = vec![4.61, 4.63, 4.66, 4.67, 4.66, 4.69, 4.72, 4.74];
//!
//! // Build the filter
//! let filter = Hp::new()
//!     .lambda(1600.0)     // Conventional value for quarterly data
//!     .build()?;
//!
//! // Decompose the series
//! let result = filter.decompose(&log_gdp)?;
//!
//! println!("{}", result);
//! # Result::<(), HpError>::Ok(())
//! ```
//!
//! ## Full Features
//!
//! ```rust
//! use hpfilter::prelude::*;
//!
//! // Quarterly levels with period labels, logged before filtering
//! let levels = vec![100.0, 102.0, 104.5, 103.9, 106.2, 108.0, 107.1, 109.8];
//! let labels: Vec<String> = (0..8).map(|i| format!("2000Q{}", i + 1)).collect();
//!
//! let series = TimeSeries::with_labels(ln_series(&levels)?, labels)?;
//!
//! let filter = Hp::new()
//!     .lambda(1600.0)
//!     .return_diagnostics() // Cycle volatility, trend smoothness
//!     .build()?;
//!
//! let result = filter.decompose_series(&series)?;
//!
//! // Compare trends under several smoothing parameters
//! let by_lambda = filter.sweep(&series.values, &[10.0, 100.0, 1600.0])?;
//! assert_eq!(by_lambda.len(), 3);
//!
//! println!("{}", result);
//! # Result::<(), HpError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `decompose` returns a `Result<HpResult<T>, HpError>`.
//!
//! - **`Ok(HpResult<T>)`**: Contains the trend, the cycle, and optional
//!   diagnostics. `trend[i] + cycle[i]` reconstructs the input exactly up
//!   to floating-point rounding.
//! - **`Err(HpError)`**: Indicates a failure (e.g., too few points,
//!   negative λ, NaN in the input).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use hpfilter::prelude::*;
//! # let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let result = Hp::new().lambda(100.0).build()?.decompose(&y)?;
//! # Result::<(), HpError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use hpfilter::prelude::*;
//! # let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let filter = Hp::new().build()?;
//!
//! match filter.decompose(&y) {
//!     Ok(result) => println!("Cycle: {:?}", result.cycle),
//!     Err(e) => eprintln!("Decomposition failed: {}", e),
//! }
//! # Result::<(), HpError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! hpfilter = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` and small series to keep the footprint down; the solve
//! allocates three working vectors of length n and nothing else.
//!
//! ## References
//!
//! - Hodrick, R. J., and Prescott, E. C. (1997). "Postwar U.S. Business
//!   Cycles: An Empirical Investigation"
//! - Ravn, M. O., and Uhlig, H. (2002). "On Adjusting the Hodrick-Prescott
//!   Filter for the Frequency of Observations"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and shared error types.
mod primitives;

// Layer 2: Math - pure numerical building blocks.
mod math;

// Layer 3: Algorithms - penalty and normal-equation construction.
mod algorithms;

// Layer 4: Evaluation - diagnostics and cross-series comparison.
mod evaluation;

// Layer 5: Engine - validation, execution, and result types.
mod engine;

// High-level fluent API for HP decomposition.
mod api;

// Standard HP filter prelude.
pub mod prelude {
    pub use crate::api::{
        cycle_correlation, ln_series, HpBuilder as Hp, HpError, HpFilter, HpResult, TimeSeries,
        LAMBDA_ANNUAL, LAMBDA_QUARTERLY,
    };
    pub use crate::evaluation::diagnostics::Diagnostics;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
