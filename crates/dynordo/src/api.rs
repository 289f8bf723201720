//! High-level API for building and applying dynamic orderings.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder
//! collecting typed comparison functions in priority order, and the ordering
//! operations exposed on the finished dynamic comparator.
//!
//! ## Design notes
//!
//! * **Validated**: Type agreement across functions is checked when
//!   `.build()` is called; per-call argument errors are raised before any
//!   mutation, so a failed operation never leaves a sequence half processed.
//! * **Delegating**: Every operation converts its operands and hands the
//!   actual work to the statically typed `ordo` core through the adapters
//!   layer.
//!
//! ### Configuration flow
//!
//! 1. Create a [`DynOrder`] via `DynOrder::new()`.
//! 2. Chain `.by(type, fn)` in tie-break priority order.
//! 3. Call `.build()` to obtain a [`DynComparator`].

// External dependencies
use std::cmp::Ordering;

// Internal dependencies
use crate::adapters::seq::{
    as_sequence, as_sequence_ref, canonical, pair_comparator, restore_pairs, take_pairs,
    value_comparator,
};
use crate::compare::comparator::{DynCompareFn, DynComparator};
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;
use crate::typing::descriptor::TypeDescriptor;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a composite dynamic ordering.
pub struct DynOrder {
    fns: Vec<DynCompareFn>,
}

impl DynOrder {
    /// Create a builder with no comparison functions.
    pub fn new() -> Self {
        Self { fns: Vec::new() }
    }

    /// Append a comparison function over operands of the given type.
    ///
    /// Functions are evaluated in the order they were appended; a function is
    /// consulted only when every earlier function reported equality. Operands
    /// are converted to the declared type before the function runs.
    pub fn by<F>(mut self, ty: TypeDescriptor, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        self.fns.push(DynCompareFn::new(ty, f));
        self
    }

    /// Append a prebuilt comparison function.
    pub fn with(mut self, f: DynCompareFn) -> Self {
        self.fns.push(f);
        self
    }

    /// Build the comparator.
    ///
    /// The first function's type becomes the comparator's type; later
    /// functions must be type-compatible with it. Fails with the core's
    /// `EmptyComparator` when no function was appended, and with
    /// [`DynOrderError::TypeMismatch`] on heterogeneous function types.
    pub fn build(self) -> Result<DynComparator, DynOrderError> {
        DynComparator::from_fns(self.fns)
    }
}

impl Default for DynOrder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Ordering Operations
// ============================================================================

impl DynComparator {
    /// Sort a sequence (or pointer chain to one) according to the comparator.
    ///
    /// Elements keep their own representations; only their order changes.
    pub fn sort(&self, seq: &mut Value) -> Result<(), DynOrderError> {
        let items = as_sequence(seq)?;
        let mut pairs = take_pairs(self, items)?;

        let cmp = pair_comparator(self)?;
        cmp.sort(&mut pairs);

        restore_pairs(items, pairs);
        Ok(())
    }

    /// Sort a sequence, keeping the original order of equal elements.
    pub fn sort_stable(&self, seq: &mut Value) -> Result<(), DynOrderError> {
        let items = as_sequence(seq)?;
        let mut pairs = take_pairs(self, items)?;

        let cmp = pair_comparator(self)?;
        cmp.sort_stable(&mut pairs);

        restore_pairs(items, pairs);
        Ok(())
    }

    /// Rearrange a sequence so index `k` holds the k-th smallest element.
    ///
    /// As a side effect the sequence is partitioned around index `k`. Fails
    /// with the core's `OutOfBounds` unless `0 <= k < len`.
    pub fn select(&self, seq: &mut Value, k: usize) -> Result<(), DynOrderError> {
        let items = as_sequence(seq)?;
        let mut pairs = take_pairs(self, items)?;

        let cmp = pair_comparator(self)?;
        let result = cmp.select(&mut pairs, k);

        // Restore also on a bounds failure; the order is then unchanged.
        restore_pairs(items, pairs);
        result.map_err(DynOrderError::from)
    }

    /// Binary-search an ascending-sorted sequence for `value`.
    ///
    /// The sequence must be sorted under this comparator; that precondition
    /// is not verified. Returns `None` when no element compares equal.
    pub fn search(&self, seq: &Value, value: &Value) -> Result<Option<usize>, DynOrderError> {
        let items = as_sequence_ref(seq)?;
        let canon = canonical(self, items)?;
        let target = self.ty().convert(value)?;

        let cmp = value_comparator(self)?;
        Ok(cmp.search(&canon, &target))
    }

    /// Indices of the minimal and maximal elements, earliest on ties.
    ///
    /// An empty sequence yields `(None, None)`.
    pub fn min_max(
        &self,
        seq: &Value,
    ) -> Result<(Option<usize>, Option<usize>), DynOrderError> {
        let items = as_sequence_ref(seq)?;
        let canon = canonical(self, items)?;

        let cmp = value_comparator(self)?;
        Ok(cmp.min_max(&canon))
    }

    /// Check whether the sequence is in ascending order.
    pub fn is_sorted(&self, seq: &Value) -> Result<bool, DynOrderError> {
        let items = as_sequence_ref(seq)?;
        let canon = canonical(self, items)?;

        let cmp = value_comparator(self)?;
        Ok(cmp.is_sorted(&canon))
    }

    /// Check whether the sequence is in strictly ascending order.
    pub fn is_strict_sorted(&self, seq: &Value) -> Result<bool, DynOrderError> {
        let items = as_sequence_ref(seq)?;
        let canon = canonical(self, items)?;

        let cmp = value_comparator(self)?;
        Ok(cmp.is_strict_sorted(&canon))
    }
}
