//! Tests for the single-pass scans: min/max and sortedness.

use ordo::prelude::*;

fn natural() -> Comparator<i64> {
    Comparator::natural()
}

// ============================================================================
// Min/Max Tests
// ============================================================================

/// Test min/max on an empty sequence.
#[test]
fn test_min_max_empty() {
    let cmp = natural();
    assert_eq!(cmp.min_max(&[]), (None, None));
}

/// Test min/max on a single value.
#[test]
fn test_min_max_single() {
    let cmp = natural();
    assert_eq!(cmp.min_max(&[1]), (Some(0), Some(0)));
}

/// Test that ties keep the first occurrence.
#[test]
fn test_min_max_first_occurrence_on_ties() {
    let cmp = natural();
    assert_eq!(cmp.min_max(&[1, 1, 2, 2]), (Some(0), Some(2)));
}

/// Test min/max on an unsorted sequence.
#[test]
fn test_min_max_unsorted() {
    let cmp = natural();
    assert_eq!(cmp.min_max(&[3, 1, 2]), (Some(1), Some(0)));
}

/// Test min/max under a reversed comparator.
#[test]
fn test_min_max_reversed() {
    let cmp = natural().reversed();
    assert_eq!(cmp.min_max(&[3, 1, 2]), (Some(0), Some(1)));
}

// ============================================================================
// Sortedness Tests
// ============================================================================

/// Test sortedness over the edge and regular cases.
#[test]
fn test_is_sorted_cases() {
    let cmp = natural();

    // (sequence, sorted, strictly sorted)
    let cases: &[(&[i64], bool, bool)] = &[
        (&[], true, true),
        (&[1], true, true),
        (&[1, 5, 5], true, false),
        (&[1, 5, 10], true, true),
        (&[1, 1, 1], true, false),
        (&[10, 5, 5], false, false),
        (&[10, 5, 1], false, false),
    ];

    for (seq, sorted, strict) in cases {
        assert_eq!(cmp.is_sorted(seq), *sorted, "is_sorted for {seq:?}");
        assert_eq!(
            cmp.is_strict_sorted(seq),
            *strict,
            "is_strict_sorted for {seq:?}"
        );
    }
}

/// Test a decreasing order through a reversed comparator.
#[test]
fn test_is_sorted_reversed() {
    let cmp = natural().reversed();

    assert!(cmp.is_sorted(&[10, 5, 1]));
    assert!(!cmp.is_sorted(&[1, 5, 10]));
}
