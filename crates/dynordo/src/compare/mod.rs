//! Layer 3: Compare
//!
//! # Purpose
//!
//! This layer implements dynamic comparator composition (an ordered,
//! non-empty list of comparison functions whose declared types must satisfy
//! the compatibility lattice) and the condition objects bound to a
//! left-hand value.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Compare ← You are here
//!   ↓
//! Layer 2: Typing
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dynamic comparator composition and guards.
pub mod comparator;

/// Conditions bound to a left-hand value.
pub mod condition;
