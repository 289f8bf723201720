//! Deterministic order-statistic selection.
//!
//! ## Purpose
//!
//! This module rearranges a sequence view in place so that position `k`
//! holds the element that a full ascending sort would put there, with every
//! smaller element to its left and every greater-or-equal element to its
//! right.
//!
//! ## Design notes
//!
//! * **Deterministic**: The pivot is chosen by median-of-medians, so the
//!   worst case is linear, not expected-linear as with random pivots.
//! * **Iterative**: Both the selection loop and the nested medians reduction
//!   shrink a window instead of recursing, bounding stack use.
//! * **In-place**: All movement happens through view swaps; narrowed windows
//!   still mutate the caller's sequence.
//!
//! ## Key concepts
//!
//! 1. **Pivot**: groups of up to five elements are insertion-sorted and their
//!    medians compacted to the window front; the reduction repeats on the
//!    medians region until five or fewer elements remain, whose median lands
//!    at window position 0.
//! 2. **Partition**: the pivot moves to the last position; strictly smaller
//!    elements are swapped into a growing cursor region; the pivot lands at
//!    the cursor, its final position within the window.
//! 3. **Window shrink**: each round continues on the side of the pivot that
//!    still contains rank `k`, with at least a fixed fraction of the window
//!    discarded per round.
//!
//! ## Invariants
//!
//! * After a round returning pivot position `p`, every element left of `p`
//!   compares strictly less than the pivot and every element right of it
//!   compares greater or equal.
//! * The sequence is a permutation of its input at every step.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::compare::comparator::Comparator;
use crate::primitives::errors::OrderError;
use crate::primitives::view::SequenceView;

// Elements per median group.
const GROUP: usize = 5;

// ============================================================================
// Selection
// ============================================================================

/// Rearrange the view so position `k` holds the k-th smallest element.
///
/// Fails with [`OrderError::OutOfBounds`] unless `0 <= k < len`.
pub fn select<T>(
    cmp: &Comparator<T>,
    mut s: SequenceView<'_, T>,
    mut k: usize,
) -> Result<(), OrderError> {
    if k >= s.len() {
        return Err(OrderError::OutOfBounds { k, len: s.len() });
    }
    loop {
        pivot(cmp, &mut s);
        let p = partition(cmp, &mut s, 0);

        // Extend over the run of elements equal to the pivot. Ranks inside
        // the run are already in place, and skipping the whole run keeps the
        // round count linear when the sequence is dominated by duplicates.
        let mut q = p;
        while q + 1 < s.len() && cmp.compare(s.index(q + 1), s.index(p)) == Ordering::Equal {
            q += 1;
        }

        if (p..=q).contains(&k) {
            return Ok(());
        }
        if k > q {
            k -= q + 1;
            let len = s.len();
            s = s.narrow(q + 1, len);
        } else {
            s = s.narrow(0, p);
        }
    }
}

// ============================================================================
// Pivot Selection
// ============================================================================

// Put the median-of-medians at window position 0.
//
// Each pass compacts group medians to the window front and then restricts
// the window to that front region, so the next pass finds the medians of
// the medians.
pub fn pivot<T>(cmp: &Comparator<T>, s: &mut SequenceView<'_, T>) {
    let mut w = s.sub(0, s.len());
    loop {
        let n = w.len();
        if n == 0 {
            return;
        }

        // For five or fewer elements the median is exact.
        if n <= GROUP {
            sort_small(cmp, &mut w);
            w.swap((n - 1) / 2, 0);
            return;
        }

        // Move the median of each group of five to the front of the window.
        let mut med_len = 0;
        let mut left = 0;
        while left < n {
            let right = usize::min(left + GROUP, n);
            sort_small(cmp, &mut w.sub(left, right));

            // Lower-middle median for a short trailing group.
            w.swap((left + right - 1) / 2, med_len);
            med_len += 1;
            left += GROUP;
        }

        // Reduce to the medians region.
        w = w.narrow(0, med_len);
    }
}

// ============================================================================
// Partition
// ============================================================================

// Partition the window around the element at position `p`.
//
// Returns the pivot's final position: all elements left of it compare
// strictly less than the pivot, all elements right of it compare greater or
// equal.
pub fn partition<T>(cmp: &Comparator<T>, s: &mut SequenceView<'_, T>, p: usize) -> usize {
    let n = s.len();

    // Park the pivot at the end of the window.
    s.swap(p, n - 1);

    // Grow a cursor region of strictly smaller elements from the front.
    let mut cursor = 0;
    for i in 0..n - 1 {
        if cmp.compare(s.index(i), s.index(n - 1)) == Ordering::Less {
            s.swap(cursor, i);
            cursor += 1;
        }
    }

    // The cursor is the pivot's verified position.
    s.swap(cursor, n - 1);
    cursor
}

// ============================================================================
// Small Sort
// ============================================================================

// Insertion-sort a small window.
pub fn sort_small<T>(cmp: &Comparator<T>, s: &mut SequenceView<'_, T>) {
    for i in 1..s.len() {
        let mut j = i;
        while j > 0 && cmp.compare(s.index(j - 1), s.index(j)) == Ordering::Greater {
            s.swap(j - 1, j);
            j -= 1;
        }
    }
}
