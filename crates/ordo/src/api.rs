//! High-level API for building and applying orderings.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder collecting three-way comparison functions in priority order, and
//! the ordering operations exposed on the finished comparator.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; comparison functions are plain closures.
//! * **Validated**: Emptiness is checked when `.build()` is called.
//! * **Delegating**: Sorting defers to the standard library sorts; search,
//!   scans, and selection defer to the algorithms layer.
//!
//! ### Configuration flow
//!
//! 1. Create an [`Order`] via `Order::new()`.
//! 2. Chain `.by(..)` / `.by_key(..)` in tie-break priority order.
//! 3. Call `.build()` to obtain a [`Comparator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::{scan, search, select};
use crate::compare::comparator::{CompareFn, Comparator};
use crate::primitives::errors::OrderError;
use crate::primitives::view::SequenceView;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a composite ordering over `T`.
pub struct Order<T> {
    fns: Vec<CompareFn<T>>,
}

impl<T> Order<T> {
    /// Create a builder with no comparison functions.
    pub fn new() -> Self {
        Self { fns: Vec::new() }
    }

    /// Append a three-way comparison function.
    ///
    /// Functions are evaluated in the order they were appended; a function is
    /// consulted only when every earlier function reported equality.
    pub fn by<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.fns.push(Arc::new(f));
        self
    }

    /// Append a comparison by a key extraction function.
    pub fn by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.by(move |lhs, rhs| key(lhs).cmp(&key(rhs)))
    }

    /// Build the comparator.
    ///
    /// Fails with [`OrderError::EmptyComparator`] when no function was
    /// appended.
    pub fn build(self) -> Result<Comparator<T>, OrderError> {
        Comparator::from_fns(self.fns)
    }
}

impl<T> Default for Order<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Ordering Operations
// ============================================================================

impl<T> Comparator<T> {
    /// Sort a sequence according to the comparator.
    pub fn sort(&self, seq: &mut [T]) {
        seq.sort_unstable_by(|lhs, rhs| self.compare(lhs, rhs));
    }

    /// Sort a sequence, keeping the original order of equal elements.
    pub fn sort_stable(&self, seq: &mut [T]) {
        seq.sort_by(|lhs, rhs| self.compare(lhs, rhs));
    }

    /// Binary-search an ascending-sorted sequence for `value`.
    ///
    /// The sequence must be sorted under this comparator; that precondition
    /// is not verified. Returns `None` when no element compares equal.
    pub fn search(&self, seq: &[T], value: &T) -> Option<usize> {
        search::search(self, seq, value)
    }

    /// Indices of the minimal and maximal elements, earliest on ties.
    ///
    /// An empty sequence yields `(None, None)`.
    pub fn min_max(&self, seq: &[T]) -> (Option<usize>, Option<usize>) {
        scan::min_max(self, seq)
    }

    /// Check whether the sequence is in ascending order.
    pub fn is_sorted(&self, seq: &[T]) -> bool {
        scan::is_sorted(self, seq, false)
    }

    /// Check whether the sequence is in strictly ascending order.
    pub fn is_strict_sorted(&self, seq: &[T]) -> bool {
        scan::is_sorted(self, seq, true)
    }

    /// Rearrange the sequence so index `k` holds the k-th smallest element.
    ///
    /// As a side effect the sequence is partitioned around index `k`: every
    /// element before it compares less or equal, every element after it
    /// compares greater or equal. Fails with [`OrderError::OutOfBounds`]
    /// unless `0 <= k < seq.len()`.
    pub fn select(&self, seq: &mut [T], k: usize) -> Result<(), OrderError> {
        select::select(self, SequenceView::new(seq), k)
    }
}
