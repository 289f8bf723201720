//! Error types for dynamic ordering operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while describing
//! a dynamic type, building a dynamic comparator, or applying an ordering
//! operation to dynamic values.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the type names involved, rendered the way
//!   descriptors display (`*` per pointer layer).
//! * **Fail-fast**: Every variant is a synchronous precondition violation;
//!   operations validate fully before mutating anything.
//! * **Layered**: Failures of the generic core pass through unchanged inside
//!   the [`DynOrderError::Order`] variant.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// External dependencies
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use ordo::prelude::OrderError;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for dynamic ordering operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DynOrderError {
    /// The value's type cannot be described for comparison (e.g., a sequence
    /// of non-byte elements).
    UnsupportedType {
        /// Name of the offending type.
        type_name: String,
    },

    /// Comparison functions within one comparator have incompatible types.
    TypeMismatch {
        /// Type of the comparator (taken from its first function).
        expected: String,
        /// Incompatible type supplied later.
        got: String,
    },

    /// The value's runtime type is incompatible with the comparator's type.
    ConversionFailed {
        /// Type of the supplied value.
        from: String,
        /// Type of the comparator.
        to: String,
    },

    /// The argument is neither a sequence nor a pointer chain to one.
    NotASequence {
        /// Type of the supplied value.
        got: String,
    },

    /// No default comparator is registered for the type.
    MissingComparator {
        /// Name of the unresolved type.
        type_name: String,
    },

    /// A failure raised by the generic ordering core.
    Order(OrderError),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DynOrderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsupportedType { type_name } => {
                write!(f, "Type {type_name} is not supported for comparison")
            }
            Self::TypeMismatch { expected, got } => {
                write!(
                    f,
                    "All functions should have the same type, got: {expected}, {got}"
                )
            }
            Self::ConversionFailed { from, to } => {
                write!(f, "Type {from} can't be converted to: {to}")
            }
            Self::NotASequence { got } => write!(f, "Not a sequence: {got}"),
            Self::MissingComparator { type_name } => {
                write!(f, "No comparator registered for type {type_name}")
            }
            Self::Order(err) => err.fmt(f),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl std::error::Error for DynOrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Order(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OrderError> for DynOrderError {
    fn from(err: OrderError) -> Self {
        Self::Order(err)
    }
}
