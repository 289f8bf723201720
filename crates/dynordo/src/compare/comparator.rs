//! Dynamic comparator composition.
//!
//! ## Purpose
//!
//! This module defines the dynamically typed comparator: comparison
//! functions paired with declared type descriptors, composed with tie-break
//! semantics. The comparator's type is taken from its first function; every
//! later function must satisfy `check` against it.
//!
//! ## Design notes
//!
//! * **Converting**: `compare` converts both operands to the comparator's
//!   type before any function runs, so the functions always see canonical
//!   representations.
//! * **Guarded**: `require_value` and `require_sequence` validate arguments
//!   fully before anything executes; misuse never leaves a sequence half
//!   processed.
//! * **Immutable**: Negation produces a new comparator, tie-break order
//!   preserved.

// External dependencies
use std::cmp::Ordering;
use std::sync::Arc;

// Internal dependencies
use crate::adapters::seq::as_sequence_ref;
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;
use crate::typing::descriptor::TypeDescriptor;
use ordo::prelude::OrderError;

// ============================================================================
// Compare Function
// ============================================================================

// A shared dynamic three-way comparison function.
type DynFn = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// A dynamic comparison function together with its declared type.
#[derive(Clone)]
pub struct DynCompareFn {
    f: DynFn,
    ty: TypeDescriptor,
}

impl DynCompareFn {
    /// Pair a comparison function with the type its operands resolve to.
    pub fn new<F>(ty: TypeDescriptor, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        Self { f: Arc::new(f), ty }
    }

    /// The declared operand type.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    // Evaluate the function on converted operands.
    fn call(&self, lhs: &Value, rhs: &Value) -> Ordering {
        (*self.f)(lhs, rhs)
    }

    // A negated copy of this function.
    fn reversed(&self) -> Self {
        let original = Arc::clone(&self.f);
        Self {
            f: Arc::new(move |lhs: &Value, rhs: &Value| (*original)(lhs, rhs).reverse()),
            ty: self.ty.clone(),
        }
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// A composite dynamic ordering.
#[derive(Clone)]
pub struct DynComparator {
    fns: Vec<DynCompareFn>,
}

impl std::fmt::Debug for DynComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ty = self.fns.first().map(|first| first.ty.to_string());
        f.debug_struct("DynComparator")
            .field("ty", &ty)
            .field("len", &self.fns.len())
            .finish()
    }
}

impl DynComparator {
    /// Build a comparator from a list of comparison functions.
    ///
    /// The first function's type becomes the comparator's type; every later
    /// function must satisfy `check` against it, else the build fails with
    /// [`DynOrderError::TypeMismatch`]. An empty list fails with the core's
    /// `EmptyComparator`.
    pub(crate) fn from_fns(fns: Vec<DynCompareFn>) -> Result<Self, DynOrderError> {
        let first = match fns.first() {
            None => return Err(OrderError::EmptyComparator.into()),
            Some(first) => first,
        };
        for later in &fns[1..] {
            if !first.ty().check(later.ty()) {
                return Err(DynOrderError::TypeMismatch {
                    expected: first.ty().to_string(),
                    got: later.ty().to_string(),
                });
            }
        }
        Ok(Self { fns })
    }

    // A comparator from a single function; cannot be empty by construction.
    pub(crate) fn single(f: DynCompareFn) -> Self {
        Self { fns: vec![f] }
    }

    /// The comparator's type, taken from its first function.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.fns[0].ty
    }

    /// Compare two values, converting both to the comparator's type first.
    ///
    /// Fails with [`DynOrderError::ConversionFailed`] when either operand's
    /// type is incompatible.
    pub fn compare(&self, lhs: &Value, rhs: &Value) -> Result<Ordering, DynOrderError> {
        let lhs = self.ty().convert(lhs)?;
        let rhs = self.ty().convert(rhs)?;
        Ok(self.compare_converted(&lhs, &rhs))
    }

    // Compare already-converted operands, first non-equal result wins.
    pub(crate) fn compare_converted(&self, lhs: &Value, rhs: &Value) -> Ordering {
        for f in &self.fns {
            let cmp = f.call(lhs, rhs);
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
    pub fn reversed(&self) -> Self {
        Self {
            fns: self.fns.iter().map(DynCompareFn::reversed).collect(),
        }
    }

    // ========================================================================
    // Guards
    // ========================================================================

    /// Check that a value's type is compatible with the comparator's type.
    pub fn require_value(&self, value: &Value) -> Result<(), DynOrderError> {
        let ty = TypeDescriptor::of(value)?;
        if !self.ty().check(&ty) {
            return Err(DynOrderError::ConversionFailed {
                from: ty.to_string(),
                to: self.ty().to_string(),
            });
        }
        Ok(())
    }

    /// Check that a value is a sequence (or pointer chain to one) whose every
    /// element is compatible with the comparator's type.
    pub fn require_sequence(&self, value: &Value) -> Result<(), DynOrderError> {
        let items = as_sequence_ref(value)?;
        for item in items {
            self.require_value(item)?;
        }
        Ok(())
    }
}
