//! Layer 2: Compare
//!
//! # Purpose
//!
//! This layer implements comparator composition (an ordered, non-empty list
//! of three-way comparison functions sharing one element type) and the
//! condition objects bound to a left-hand value.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Compare ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Comparator composition and negation.
pub mod comparator;

/// Conditions bound to a left-hand value.
pub mod condition;
