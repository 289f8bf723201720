//! Sequence unwrapping and the canonical-pair bridge.
//!
//! ## Purpose
//!
//! This module adapts dynamic sequences onto the generic core. Operations
//! follow a convert-process-restore pattern:
//!
//! 1. **Convert**: every element is converted to the comparator's type,
//!    validating the whole sequence before anything is mutated.
//! 2. **Process**: the core algorithm runs on pairs of (original, canonical)
//!    values, comparing canonicals while the originals travel along.
//! 3. **Restore**: the rearranged originals are written back, so the caller's
//!    sequence keeps its own representations in the new order.
//!
//! ## Invariants
//!
//! * A failed conversion leaves the caller's sequence untouched.
//! * The restored sequence is a permutation of the input.

// External dependencies
use std::mem;

// Internal dependencies
use crate::compare::comparator::DynComparator;
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;
use ordo::prelude::{Comparator, Order};

// An original element paired with its canonical form.
pub type Pair = (Value, Value);

/// Unwrap pointer layers down to a sequence.
///
/// Fails with [`DynOrderError::NotASequence`] when no sequence is found.
pub fn as_sequence(value: &mut Value) -> Result<&mut Vec<Value>, DynOrderError> {
    match value {
        Value::Seq(items) => Ok(items),
        Value::Ptr(inner) => as_sequence(inner),
        other => Err(DynOrderError::NotASequence {
            got: other.kind_name().into(),
        }),
    }
}

/// Read-only variant of [`as_sequence`].
pub fn as_sequence_ref(value: &Value) -> Result<&Vec<Value>, DynOrderError> {
    match value {
        Value::Seq(items) => Ok(items),
        Value::Ptr(inner) => as_sequence_ref(inner),
        other => Err(DynOrderError::NotASequence {
            got: other.kind_name().into(),
        }),
    }
}

/// Convert every element to the comparator's type.
///
/// Fails atomically: either all elements convert or none of them are used.
pub fn canonical(cmp: &DynComparator, items: &[Value]) -> Result<Vec<Value>, DynOrderError> {
    items.iter().map(|item| cmp.ty().convert(item)).collect()
}

/// Drain a validated sequence into (original, canonical) pairs.
///
/// The sequence is only drained after every element has converted, so a
/// conversion failure leaves it untouched.
pub fn take_pairs(
    cmp: &DynComparator,
    items: &mut Vec<Value>,
) -> Result<Vec<Pair>, DynOrderError> {
    let canon = canonical(cmp, items)?;
    Ok(mem::take(items).into_iter().zip(canon).collect())
}

/// Write the originals of a rearranged pair list back into the sequence.
pub fn restore_pairs(items: &mut Vec<Value>, pairs: Vec<Pair>) {
    *items = pairs.into_iter().map(|(original, _)| original).collect();
}

/// A core comparator over pairs, comparing the canonical halves.
pub fn pair_comparator(cmp: &DynComparator) -> Result<Comparator<Pair>, DynOrderError> {
    let probe = cmp.clone();
    Ok(Order::new()
        .by(move |a: &Pair, b: &Pair| probe.compare_converted(&a.1, &b.1))
        .build()?)
}

/// A core comparator over canonical values.
pub fn value_comparator(cmp: &DynComparator) -> Result<Comparator<Value>, DynOrderError> {
    let probe = cmp.clone();
    Ok(Order::new()
        .by(move |a: &Value, b: &Value| probe.compare_converted(a, b))
        .build()?)
}
