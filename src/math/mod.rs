//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used throughout
//! the crate:
//! - Banded storage and LDLᵀ solver for symmetric pentadiagonal systems
//! - Scalar reductions (mean, variance, correlation)
//! - Log transform with a non-positive guard
//!
//! These are reusable numerical routines with no filter-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Symmetric pentadiagonal systems and their banded LDLᵀ solver.
pub mod penta;

/// Scalar reductions over series.
pub mod stats;

/// Log transform for level series.
pub mod transform;
