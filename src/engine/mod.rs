//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and execution control: input
//! validation, the decomposition executor, and the public result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Decomposition executor.
pub mod executor;

/// Result structures.
pub mod output;
