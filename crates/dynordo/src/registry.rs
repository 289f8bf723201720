//! Default-comparator resolution at the boundary.
//!
//! ## Purpose
//!
//! This module resolves a bare type to a default comparator: explicit
//! registrations first (the opt-in hook for types carrying their own
//! comparison), then a fixed set of built-ins for primitive numerics, text,
//! byte sequences, booleans, and timestamps.
//!
//! ## Design notes
//!
//! * **Explicit over probing**: There is no runtime capability sniffing; a
//!   type opts in by registering a comparator, and resolution consults the
//!   registry alone.
//! * **Widest built-ins**: Built-in numeric comparators are registered at the
//!   64-bit widths, so every narrower width of the same category resolves to
//!   them through the conversion lattice.
//! * **No global state**: A registry is an ordinary value; callers share one
//!   explicitly.
//!
//! ## Non-goals
//!
//! * This module does not define comparison semantics; it only stores and
//!   resolves comparators.

// External dependencies
use std::cmp::Ordering;

// Internal dependencies
use crate::adapters::seq::as_sequence_ref;
use crate::compare::comparator::{DynCompareFn, DynComparator};
use crate::compare::condition::DynCondition;
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;
use crate::typing::descriptor::{BaseKind, TypeDescriptor};
use ordo::prelude::OrderError;

// ============================================================================
// Registry
// ============================================================================

/// Maps types to their default comparators.
pub struct Registry {
    entries: Vec<DynComparator>,
}

impl Registry {
    /// A registry holding the built-in comparators.
    pub fn new() -> Self {
        Self {
            entries: builtins(),
        }
    }

    /// Register a comparator as the default for its type.
    ///
    /// Registrations take priority over the built-ins and over earlier
    /// registrations.
    pub fn register(&mut self, cmp: DynComparator) {
        self.entries.insert(0, cmp);
    }

    /// Resolve the default comparator for a type.
    ///
    /// Fails with [`DynOrderError::MissingComparator`] when no registered or
    /// built-in comparator accepts the type.
    pub fn resolve(&self, ty: &TypeDescriptor) -> Result<&DynComparator, DynOrderError> {
        self.entries
            .iter()
            .find(|cmp| cmp.ty().check(ty))
            .ok_or_else(|| DynOrderError::MissingComparator {
                type_name: ty.to_string(),
            })
    }

    // ========================================================================
    // Convenience Operations
    // ========================================================================

    /// Sort a sequence with the default comparator of its element type.
    pub fn sort(&self, seq: &mut Value) -> Result<(), DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.sort(seq),
            None => Ok(()),
        }
    }

    /// Stable variant of [`Registry::sort`].
    pub fn sort_stable(&self, seq: &mut Value) -> Result<(), DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.sort_stable(seq),
            None => Ok(()),
        }
    }

    /// Select rank `k` with the default comparator of the element type.
    pub fn select(&self, seq: &mut Value, k: usize) -> Result<(), DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.select(seq, k),
            None => Err(OrderError::OutOfBounds { k, len: 0 }.into()),
        }
    }

    /// Search a sorted sequence with the default comparator of its element
    /// type.
    pub fn search(&self, seq: &Value, value: &Value) -> Result<Option<usize>, DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.search(seq, value),
            None => Ok(None),
        }
    }

    /// Min/max indices with the default comparator of the element type.
    pub fn min_max(
        &self,
        seq: &Value,
    ) -> Result<(Option<usize>, Option<usize>), DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.min_max(seq),
            None => Ok((None, None)),
        }
    }

    /// Sortedness with the default comparator of the element type.
    pub fn is_sorted(&self, seq: &Value) -> Result<bool, DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.is_sorted(seq),
            None => Ok(true),
        }
    }

    /// Strict sortedness with the default comparator of the element type.
    pub fn is_strict_sorted(&self, seq: &Value) -> Result<bool, DynOrderError> {
        match self.element_comparator(seq)? {
            Some(cmp) => cmp.is_strict_sorted(seq),
            None => Ok(true),
        }
    }

    /// Bind a condition with the default comparator of the value's type.
    pub fn is(&self, value: &Value) -> Result<DynCondition<'_>, DynOrderError> {
        let ty = TypeDescriptor::of(value)?;
        self.resolve(&ty)?.is(value)
    }

    // The default comparator for a sequence's element type; `None` for an
    // empty sequence, where every operation has a trivial answer.
    fn element_comparator(
        &self,
        seq: &Value,
    ) -> Result<Option<&DynComparator>, DynOrderError> {
        let items = as_sequence_ref(seq)?;
        match items.first() {
            None => Ok(None),
            Some(first) => {
                let ty = TypeDescriptor::of(first)?;
                Ok(Some(self.resolve(&ty)?))
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Built-in Comparators
// ============================================================================

// The built-in comparator set: primitive numerics at their widest widths,
// text, byte sequences, booleans, and timestamps.
fn builtins() -> Vec<DynComparator> {
    vec![
        builtin(BaseKind::Int(64), |a, b| a.as_i64().cmp(&b.as_i64())),
        builtin(BaseKind::Uint(64), |a, b| a.as_u64().cmp(&b.as_u64())),
        builtin(BaseKind::Float(64), |a, b| match (a.as_f64(), b.as_f64()) {
            (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
            _ => Ordering::Equal,
        }),
        builtin(BaseKind::Str, |a, b| a.as_str().cmp(&b.as_str())),
        builtin(BaseKind::Bytes, |a, b| a.as_bytes().cmp(&b.as_bytes())),
        builtin(BaseKind::Bool, |a, b| a.as_bool().cmp(&b.as_bool())),
        builtin(BaseKind::Time, |a, b| a.as_time().cmp(&b.as_time())),
    ]
}

fn builtin<F>(base: BaseKind, f: F) -> DynComparator
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
{
    DynComparator::single(DynCompareFn::new(TypeDescriptor::new(base), f))
}
