//! Comparator composition.
//!
//! ## Purpose
//!
//! This module defines the composite comparator: an ordered, non-empty list
//! of three-way comparison functions over one element type, evaluated with
//! tie-break semantics.
//!
//! ## Design notes
//!
//! * **Immutable**: A comparator never changes after construction; negation
//!   produces a new comparator.
//! * **Shareable**: Comparison functions are `Send + Sync` behind `Arc`, so a
//!   comparator may be retained and reused across threads for read-only work.
//! * **Tie-break**: Functions are evaluated in priority order; the first
//!   non-equal result wins, and equality is reported only on a full tie.
//!
//! ## Invariants
//!
//! * The function list is never empty.
//!
//! ## Non-goals
//!
//! * This module does not apply the comparator to sequences; the algorithms
//!   and API layers do.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::OrderError;

// ============================================================================
// Compare Function
// ============================================================================

/// A shared three-way comparison function over `T`.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

// ============================================================================
// Comparator
// ============================================================================

/// A composite ordering over `T`.
///
/// Holds one or more three-way comparison functions in priority order. When
/// two values are compared, the first function is evaluated; if it reports
/// equality the following function is evaluated, until a non-equal result is
/// found. If every function reports equality the values are equal.
pub struct Comparator<T> {
    fns: Vec<CompareFn<T>>,
}

impl<T> Comparator<T> {
    /// Build a comparator from a list of comparison functions.
    ///
    /// Fails with [`OrderError::EmptyComparator`] when the list is empty.
    pub(crate) fn from_fns(fns: Vec<CompareFn<T>>) -> Result<Self, OrderError> {
        if fns.is_empty() {
            return Err(OrderError::EmptyComparator);
        }
        Ok(Self { fns })
    }

    /// Compare two values, first non-equal function result wins.
    pub fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        for f in &self.fns {
            let cmp = (**f)(lhs, rhs);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }

    /// A comparator with every function individually negated.
    ///
    /// The tie-break order is preserved: the function list is not reversed,
    /// each function's result is.
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let fns = self
            .fns
            .iter()
            .map(|f| {
                let original = Arc::clone(f);
                Arc::new(move |lhs: &T, rhs: &T| (*original)(lhs, rhs).reverse()) as CompareFn<T>
            })
            .collect();
        Self { fns }
    }

    /// The default comparator for a type with a native three-way comparison.
    pub fn natural() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            fns: vec![Arc::new(|lhs: &T, rhs: &T| lhs.cmp(rhs)) as CompareFn<T>],
        }
    }
}
