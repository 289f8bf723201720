//! Tests for binary search.
//!
//! The sequences are ascending-sorted as the operation requires; the cases
//! cover odd and even lengths, boundary values, and misses inside and outside
//! the value range.

use ordo::prelude::*;

fn natural() -> Comparator<i64> {
    Comparator::natural()
}

// ============================================================================
// Hits
// ============================================================================

/// Test that present values are found at their index.
#[test]
fn test_search_finds_values() {
    let cmp = natural();

    assert_eq!(cmp.search(&[1, 2, 3], &2), Some(1));
    assert_eq!(cmp.search(&[1, 2, 3], &1), Some(0));
    assert_eq!(cmp.search(&[1, 2, 3], &3), Some(2));

    assert_eq!(cmp.search(&[1, 2, 3, 4], &2), Some(1));
    assert_eq!(cmp.search(&[1, 2, 3, 4], &1), Some(0));
    assert_eq!(cmp.search(&[1, 2, 3, 4], &4), Some(3));
}

/// Test that an index among equal elements points at an equal element.
#[test]
fn test_search_ties_unspecified_but_equal() {
    let cmp = natural();

    let seq = [1, 5, 5, 5, 9];
    let idx = cmp.search(&seq, &5).expect("value is present");
    assert_eq!(seq[idx], 5);
}

// ============================================================================
// Misses
// ============================================================================

/// Test misses on an empty sequence and beyond both ends.
#[test]
fn test_search_not_found() {
    let cmp = natural();

    assert_eq!(cmp.search(&[], &1), None);
    assert_eq!(cmp.search(&[1, 2, 3], &4), None);
    assert_eq!(cmp.search(&[1, 2, 3], &0), None);
    assert_eq!(cmp.search(&[1, 2, 3, 4], &5), None);
    assert_eq!(cmp.search(&[1, 2], &0), None);
}

/// Test a miss inside the value range.
#[test]
fn test_search_gap_not_found() {
    let cmp = natural();

    assert_eq!(cmp.search(&[1, 2, 3, 5], &4), None);
}

// ============================================================================
// Composite Comparators
// ============================================================================

/// Test searching under a composite ordering.
#[test]
fn test_search_composite() {
    let cmp = Order::new()
        .by_key(|p: &(i64, i64)| p.0)
        .by_key(|p: &(i64, i64)| p.1)
        .build()
        .unwrap();

    let seq = [(1, 1), (1, 2), (2, 1)];
    assert_eq!(cmp.search(&seq, &(1, 2)), Some(1));
    assert_eq!(cmp.search(&seq, &(2, 2)), None);
}
