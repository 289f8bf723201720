//! Conditions bound to a left-hand value.
//!
//! A condition pairs a comparator with one left-hand value so that repeated
//! comparisons against it read naturally. Conditions are transient: they hold
//! no state beyond one query's lifetime.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::compare::comparator::Comparator;

// A left-hand value bound to a borrowed comparator.
pub struct Condition<'a, T> {
    cmp: &'a Comparator<T>,
    lhs: T,
}

impl<T> Comparator<T> {
    /// Bind a left-hand value for readable comparisons.
    pub fn is(&self, lhs: T) -> Condition<'_, T> {
        Condition { cmp: self, lhs }
    }
}

impl<T> Condition<'_, T> {
    /// Check if the bound value is equal to `rhs`.
    pub fn equal(&self, rhs: &T) -> bool {
        self.compare(rhs) == Ordering::Equal
    }

    /// Check if the bound value is not equal to `rhs`.
    pub fn not_equal(&self, rhs: &T) -> bool {
        self.compare(rhs) != Ordering::Equal
    }

    /// Check if the bound value is greater than `rhs`.
    pub fn greater(&self, rhs: &T) -> bool {
        self.compare(rhs) == Ordering::Greater
    }

    /// Check if the bound value is greater than or equal to `rhs`.
    pub fn greater_equal(&self, rhs: &T) -> bool {
        self.compare(rhs) != Ordering::Less
    }

    /// Check if the bound value is less than `rhs`.
    pub fn less(&self, rhs: &T) -> bool {
        self.compare(rhs) == Ordering::Less
    }

    /// Check if the bound value is less than or equal to `rhs`.
    pub fn less_equal(&self, rhs: &T) -> bool {
        self.compare(rhs) != Ordering::Greater
    }

    #[inline]
    fn compare(&self, rhs: &T) -> Ordering {
        self.cmp.compare(&self.lhs, rhs)
    }
}
