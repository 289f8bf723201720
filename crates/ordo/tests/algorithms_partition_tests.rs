#![cfg(feature = "dev")]
//! Tests for the internals of the selection algorithm.
//!
//! These tests pin down the behavior of the partition routine, the
//! median-of-medians pivot reduction, and the small insertion sort that the
//! public `select` operation is built from.

use ordo::internals::algorithms::select::{partition, pivot, sort_small};
use ordo::internals::primitives::view::SequenceView;
use ordo::prelude::*;

fn natural() -> Comparator<i64> {
    Comparator::natural()
}

// ============================================================================
// Partition Tests
// ============================================================================

/// Test partitioning around a chosen position.
///
/// The returned index is the pivot's verified position: strictly smaller
/// elements to its left, greater-or-equal elements to its right.
#[test]
fn test_partition_around_position() {
    let cmp = natural();

    let mut data = vec![5, 4, 2, 3, 1];
    let mut view = SequenceView::new(&mut data);
    let p = partition(&cmp, &mut view, 3);
    drop(view);

    assert_eq!(p, 2);
    assert_eq!(data, vec![2, 1, 3, 4, 5]);
}

/// Test partitioning a single element.
#[test]
fn test_partition_single() {
    let cmp = natural();

    let mut data = vec![42];
    let mut view = SequenceView::new(&mut data);
    assert_eq!(partition(&cmp, &mut view, 0), 0);
}

/// Test partitioning with duplicates of the pivot.
///
/// Duplicates are not strictly smaller, so they end up right of the pivot.
#[test]
fn test_partition_duplicates_go_right() {
    let cmp = natural();

    let mut data = vec![3, 1, 3, 0, 3];
    let mut view = SequenceView::new(&mut data);
    let p = partition(&cmp, &mut view, 0);
    drop(view);

    assert_eq!(p, 2);
    assert_eq!(&data[..2], &[1, 0]);
    for v in &data[3..] {
        assert!(*v >= 3);
    }
}

// ============================================================================
// Pivot Tests
// ============================================================================

/// Test that the pivot reduction moves the median-of-medians to position 0.
#[test]
fn test_pivot_moves_median_to_front() {
    let cmp = natural();

    // (sequence, expected median value at position 0)
    let cases: &[(&[i64], i64)] = &[
        (&[5, 4, 2, 3, 1], 3),
        (&[5, 4, 2, 3, 1, 10, 9, 8, 7], 3),
        (&[5, 4, 2, 3, 1, 10, 9, 8, 7, 6, 15, 14, 13], 8),
    ];

    for (case, want) in cases {
        let mut data = case.to_vec();
        let mut view = SequenceView::new(&mut data);
        pivot(&cmp, &mut view);
        drop(view);

        assert_eq!(data[0], *want, "median of {case:?}");
    }
}

/// Test that the pivot of a narrowed window lands at the window front.
#[test]
fn test_pivot_respects_window() {
    let cmp = natural();

    let mut data = vec![100, 3, 1, 2, -100];
    let mut view = SequenceView::new(&mut data).narrow(1, 4);
    pivot(&cmp, &mut view);
    drop(view);

    // Median of [3, 1, 2] is 2, placed at the window front (absolute 1).
    assert_eq!(data[1], 2);
    assert_eq!(data[0], 100);
    assert_eq!(data[4], -100);
}

// ============================================================================
// Small Sort Tests
// ============================================================================

/// Test the insertion sort on a small window.
#[test]
fn test_sort_small() {
    let cmp = natural();

    let mut data = vec![5, 1, -2, 10, 4];
    let mut view = SequenceView::new(&mut data);
    sort_small(&cmp, &mut view);
    drop(view);

    assert_eq!(data, vec![-2, 1, 4, 5, 10]);
}

/// Test that the insertion sort only touches its window.
#[test]
fn test_sort_small_windowed() {
    let mut data = vec![9, 3, 2, 1, 0];
    let cmp = natural();

    let mut view = SequenceView::new(&mut data).narrow(1, 4);
    sort_small(&cmp, &mut view);
    drop(view);

    assert_eq!(data, vec![9, 1, 2, 3, 0]);
}
