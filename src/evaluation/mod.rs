//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of decomposition results: summary
//! diagnostics and cross-series cycle comparison.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics and cross-series cycle correlation.
pub mod diagnostics;
