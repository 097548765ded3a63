//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the filter-specific construction: the second-difference
//! penalty and the banded HP normal matrix `I + λ·KᵗK`.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Second-difference penalty and normal-equation construction.
pub mod penalty;
