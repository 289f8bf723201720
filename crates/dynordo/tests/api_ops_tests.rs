//! Tests for the ordering operations over dynamic sequences.
//!
//! These tests verify that every operation validates fully before mutating,
//! converts elements through the lattice, delegates to the core algorithms,
//! and hands the caller's own representations back in the new order.
//!
//! ## Test Organization
//!
//! 1. **Sorting** - Order, stability, representation preservation
//! 2. **Selection** - Every rank, partitioning, bounds
//! 3. **Scanning** - Search, min/max, sortedness
//! 4. **Misuse** - Non-sequences, incompatible elements, atomicity

use dynordo::prelude::*;
use ordo::prelude::OrderError;

fn int_cmp() -> DynComparator {
    DynOrder::new()
        .by(TypeDescriptor::new(BaseKind::Int(64)), |a, b| {
            a.as_i64().cmp(&b.as_i64())
        })
        .build()
        .unwrap()
}

fn int_seq(values: &[i64]) -> Value {
    Value::from(values.iter().map(|v| Value::I64(*v)).collect::<Vec<_>>())
}

fn as_items(seq: &Value) -> &Vec<Value> {
    match seq {
        Value::Seq(items) => items,
        _ => panic!("expected a sequence"),
    }
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test plain sorting.
#[test]
fn test_sort() {
    let cmp = int_cmp();

    let mut seq = int_seq(&[2, 3, 1]);
    cmp.sort(&mut seq).unwrap();
    assert_eq!(seq, int_seq(&[1, 2, 3]));
}

/// Test that elements keep their own representations after sorting.
///
/// Narrower integers widen only for comparison; the stored values stay as
/// they were supplied.
#[test]
fn test_sort_preserves_representations() {
    let cmp = int_cmp();

    let mut seq = Value::from(vec![Value::I8(3), Value::I16(-2), Value::I64(7)]);
    cmp.sort(&mut seq).unwrap();
    assert_eq!(
        seq,
        Value::from(vec![Value::I16(-2), Value::I8(3), Value::I64(7)])
    );
}

/// Test sorting through a pointer chain to the sequence.
#[test]
fn test_sort_through_pointer() {
    let cmp = int_cmp();

    let mut boxed = Value::ptr(int_seq(&[3, 1, 2]));
    cmp.sort(&mut boxed).unwrap();
    assert_eq!(boxed, Value::ptr(int_seq(&[1, 2, 3])));
}

/// Test that stable sorting keeps the original order of equal elements.
#[test]
fn test_sort_stable_keeps_equal_order() {
    let cmp = int_cmp();

    // 2_i64 and 2_i8 compare equal; stable sort must keep their order.
    let mut seq = Value::from(vec![Value::I64(2), Value::I8(2), Value::I16(1)]);
    cmp.sort_stable(&mut seq).unwrap();
    assert_eq!(
        seq,
        Value::from(vec![Value::I16(1), Value::I64(2), Value::I8(2)])
    );
}

/// Test descending sort through a reversed comparator.
#[test]
fn test_sort_reversed() {
    let cmp = int_cmp().reversed();

    let mut seq = int_seq(&[2, 3, 1]);
    cmp.sort(&mut seq).unwrap();
    assert_eq!(seq, int_seq(&[3, 2, 1]));
}

// ============================================================================
// Selection Tests
// ============================================================================

/// Test every rank of several sequences.
#[test]
fn test_select_every_rank() {
    let cmp = int_cmp();

    let cases: &[&[i64]] = &[
        &[1],
        &[4, 1, 3, 2],
        &[5, 20, 3, 10, 100],
        &[7, 7, 7, 7],
        &[10, 1001, 23, 12, 43, 65, 504, 34, 123, 101, 21],
    ];

    for case in cases {
        let mut sorted = case.to_vec();
        sorted.sort_unstable();

        for k in 0..case.len() {
            let mut seq = int_seq(case);
            cmp.select(&mut seq, k).unwrap();

            let items = as_items(&seq);
            let kth = items[k].as_i64().unwrap();
            assert_eq!(kth, sorted[k], "rank {k} of {case:?}");

            for item in &items[..k] {
                assert!(item.as_i64().unwrap() <= kth);
            }
            for item in &items[k..] {
                assert!(item.as_i64().unwrap() >= kth);
            }
        }
    }
}

/// Test that out-of-range ranks pass the core error through, unchanged
/// sequence included.
#[test]
fn test_select_out_of_bounds() {
    let cmp = int_cmp();

    let mut seq = int_seq(&[1]);
    let err = cmp.select(&mut seq, 1).unwrap_err();
    assert_eq!(err, DynOrderError::Order(OrderError::OutOfBounds { k: 1, len: 1 }));
    assert_eq!(seq, int_seq(&[1]));
}

// ============================================================================
// Scanning Tests
// ============================================================================

/// Test binary search with converting operands.
#[test]
fn test_search() {
    let cmp = int_cmp();

    let seq = int_seq(&[1, 2, 3, 4]);
    assert_eq!(cmp.search(&seq, &Value::I64(2)).unwrap(), Some(1));
    assert_eq!(cmp.search(&seq, &Value::I8(2)).unwrap(), Some(1));
    assert_eq!(cmp.search(&seq, &Value::I64(5)).unwrap(), None);
    assert!(cmp.search(&seq, &Value::from("x")).is_err());
}

/// Test min/max indices.
#[test]
fn test_min_max() {
    let cmp = int_cmp();

    assert_eq!(
        cmp.min_max(&int_seq(&[3, 1, 2])).unwrap(),
        (Some(1), Some(0))
    );
    assert_eq!(
        cmp.min_max(&int_seq(&[1, 1, 2, 2])).unwrap(),
        (Some(0), Some(2))
    );
    assert_eq!(cmp.min_max(&int_seq(&[])).unwrap(), (None, None));
}

/// Test sortedness checks over mixed widths.
#[test]
fn test_is_sorted() {
    let cmp = int_cmp();

    let mixed = Value::from(vec![Value::I8(1), Value::I64(5), Value::I16(5)]);
    assert!(cmp.is_sorted(&mixed).unwrap());
    assert!(!cmp.is_strict_sorted(&mixed).unwrap());

    assert!(!cmp.is_sorted(&int_seq(&[10, 5, 1])).unwrap());
    assert!(cmp.is_sorted(&int_seq(&[])).unwrap());
}

// ============================================================================
// Misuse Tests
// ============================================================================

/// Test that non-sequences are rejected by every operation.
#[test]
fn test_not_a_sequence() {
    let cmp = int_cmp();

    let mut scalar = Value::I64(1);
    assert_eq!(
        cmp.sort(&mut scalar).unwrap_err(),
        DynOrderError::NotASequence { got: "i64".into() }
    );
    assert!(cmp.search(&Value::Bool(true), &Value::I64(1)).is_err());
    assert!(cmp.min_max(&Value::from("x")).is_err());
}

/// Test that an incompatible element fails before anything is mutated.
#[test]
fn test_incompatible_element_is_atomic() {
    let cmp = int_cmp();

    let mut seq = Value::from(vec![Value::I64(2), Value::Bool(true), Value::I64(1)]);
    let original = seq.clone();

    let err = cmp.sort(&mut seq).unwrap_err();
    assert!(matches!(err, DynOrderError::ConversionFailed { .. }));
    assert_eq!(seq, original, "failed sort must not reorder");

    assert!(cmp.select(&mut seq, 0).is_err());
    assert_eq!(seq, original, "failed select must not reorder");
}
