//! Windowed view over a mutable sequence.
//!
//! This module provides the low-level view used by the in-place selection
//! algorithm: one borrowed backing slice plus a `[start, end)` window and a
//! capacity bound. Narrowing only adjusts the window; reads and swaps are
//! translated by the accumulated offset, so a swap on a narrowed view always
//! mutates the caller's original sequence.

// A window `[start, end)` over a mutable backing slice.
//
// Narrowing never copies and never reallocates; `swap` acts on the backing
// slice through the accumulated offset.
#[derive(Debug)]
pub struct SequenceView<'a, T> {
    // The full backing slice.
    data: &'a mut [T],

    // Absolute start of the current window (inclusive).
    start: usize,

    // Absolute end of the current window (exclusive).
    end: usize,

    // Absolute bound that narrowing may not exceed.
    cap: usize,
}

impl<'a, T> SequenceView<'a, T> {
    // Wrap a full slice as a view.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        let cap = data.len();
        Self {
            data,
            start: 0,
            end: cap,
            cap,
        }
    }

    // Number of elements in the current window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    // Check if the current window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    // Read the element at window position `i`.
    #[inline]
    pub fn index(&self, i: usize) -> &T {
        debug_assert!(i < self.len(), "index: position out of window");
        &self.data[self.start + i]
    }

    // Swap the elements at window positions `i` and `j`.
    //
    // The swap is applied to the backing slice, also after narrowing.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len() && j < self.len(), "swap: position out of window");
        self.data.swap(self.start + i, self.start + j);
    }

    // Restrict the window to `[lo, hi)` of the current window, in constant
    // time, without copying.
    #[inline]
    pub fn narrow(self, lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi, "narrow: inverted bounds");
        debug_assert!(self.start + hi <= self.cap, "narrow: beyond capacity");
        Self {
            start: self.start + lo,
            end: self.start + hi,
            data: self.data,
            cap: self.cap,
        }
    }

    // Restrict the window to `[lo, hi)` and lower the capacity bound so that
    // later narrowing may not reach past `cap` of the current window.
    #[inline]
    pub fn narrow_bounded(self, lo: usize, hi: usize, cap: usize) -> Self {
        debug_assert!(lo <= hi && hi <= cap, "narrow_bounded: inverted bounds");
        debug_assert!(self.start + cap <= self.cap, "narrow_bounded: beyond capacity");
        Self {
            start: self.start + lo,
            end: self.start + hi,
            cap: self.start + cap,
            data: self.data,
        }
    }

    // Reborrow `[lo, hi)` of the current window as a transient sub-view.
    //
    // Swaps through the sub-view hit the same backing slice; the parent view
    // is unusable while the sub-view is alive.
    #[inline]
    pub fn sub(&mut self, lo: usize, hi: usize) -> SequenceView<'_, T> {
        debug_assert!(lo <= hi && self.start + hi <= self.end, "sub: out of window");
        SequenceView {
            data: &mut *self.data,
            start: self.start + lo,
            end: self.start + hi,
            cap: self.cap,
        }
    }
}
