#![cfg(feature = "dev")]
//! Tests for the sequence bridge onto the core.
//!
//! These tests exercise the convert-process-restore plumbing directly:
//! pointer unwrapping, atomic canonicalization, and the pair round trip.

use dynordo::internals::adapters::seq::{
    as_sequence, as_sequence_ref, canonical, restore_pairs, take_pairs,
};
use dynordo::prelude::*;

fn int_cmp() -> DynComparator {
    DynOrder::new()
        .by(TypeDescriptor::new(BaseKind::Int(64)), |a, b| {
            a.as_i64().cmp(&b.as_i64())
        })
        .build()
        .unwrap()
}

// ============================================================================
// Unwrapping Tests
// ============================================================================

/// Test unwrapping through nested pointers.
#[test]
fn test_as_sequence_unwraps_pointers() {
    let mut wrapped = Value::ptr(Value::ptr(Value::from(vec![Value::I64(1)])));

    let items = as_sequence(&mut wrapped).unwrap();
    assert_eq!(items.len(), 1);

    items.push(Value::I64(2));
    assert_eq!(
        wrapped,
        Value::ptr(Value::ptr(Value::from(vec![Value::I64(1), Value::I64(2)])))
    );
}

/// Test the rejection of non-sequences, also behind pointers.
#[test]
fn test_as_sequence_rejects_non_sequences() {
    assert!(matches!(
        as_sequence_ref(&Value::I64(1)).unwrap_err(),
        DynOrderError::NotASequence { .. }
    ));
    assert_eq!(
        as_sequence_ref(&Value::ptr(Value::from("x"))).unwrap_err(),
        DynOrderError::NotASequence { got: "str".into() }
    );
}

// ============================================================================
// Canonicalization Tests
// ============================================================================

/// Test that canonicalization widens every element.
#[test]
fn test_canonical_widens() {
    let cmp = int_cmp();

    let items = vec![Value::I8(1), Value::ptr(Value::I16(2))];
    let canon = canonical(&cmp, &items).unwrap();
    assert_eq!(canon, vec![Value::I64(1), Value::I64(2)]);
}

/// Test that a single bad element fails the whole pass.
#[test]
fn test_canonical_is_atomic() {
    let cmp = int_cmp();

    let items = vec![Value::I8(1), Value::Bool(true)];
    assert!(canonical(&cmp, &items).is_err());
}

// ============================================================================
// Pair Round Trip
// ============================================================================

/// Test that take/restore preserves the originals.
#[test]
fn test_pair_round_trip() {
    let cmp = int_cmp();

    let mut items = vec![Value::I8(3), Value::I16(-2)];
    let pairs = take_pairs(&cmp, &mut items).unwrap();
    assert!(items.is_empty(), "take drains the sequence");

    restore_pairs(&mut items, pairs);
    assert_eq!(items, vec![Value::I8(3), Value::I16(-2)]);
}

/// Test that a failed take leaves the sequence untouched.
#[test]
fn test_take_pairs_atomic_on_failure() {
    let cmp = int_cmp();

    let mut items = vec![Value::I8(3), Value::from("x")];
    assert!(take_pairs(&cmp, &mut items).is_err());
    assert_eq!(items, vec![Value::I8(3), Value::from("x")]);
}
