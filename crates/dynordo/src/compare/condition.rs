//! Conditions bound to a left-hand value.
//!
//! A condition pairs a dynamic comparator with one left-hand value, already
//! converted to the comparator's type. Every relational check validates and
//! converts its right-hand operand independently, so a condition can be
//! probed with operands of any compatible type.

// External dependencies
use std::cmp::Ordering;

// Internal dependencies
use crate::compare::comparator::DynComparator;
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;

// A converted left-hand value bound to a borrowed comparator.
pub struct DynCondition<'a> {
    cmp: &'a DynComparator,
    lhs: Value,
}

impl DynComparator {
    /// Bind a left-hand value for readable comparisons.
    ///
    /// The value is converted to the comparator's type up front; an
    /// incompatible value fails with [`DynOrderError::ConversionFailed`].
    pub fn is(&self, lhs: &Value) -> Result<DynCondition<'_>, DynOrderError> {
        Ok(DynCondition {
            cmp: self,
            lhs: self.ty().convert(lhs)?,
        })
    }
}

impl DynCondition<'_> {
    /// Check if the bound value is equal to `rhs`.
    pub fn equal(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? == Ordering::Equal)
    }

    /// Check if the bound value is not equal to `rhs`.
    pub fn not_equal(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? != Ordering::Equal)
    }

    /// Check if the bound value is greater than `rhs`.
    pub fn greater(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? == Ordering::Greater)
    }

    /// Check if the bound value is greater than or equal to `rhs`.
    pub fn greater_equal(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? != Ordering::Less)
    }

    /// Check if the bound value is less than `rhs`.
    pub fn less(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? == Ordering::Less)
    }

    /// Check if the bound value is less than or equal to `rhs`.
    pub fn less_equal(&self, rhs: &Value) -> Result<bool, DynOrderError> {
        Ok(self.compare(rhs)? != Ordering::Greater)
    }

    // Convert the right-hand operand and compare; each call validates the
    // operand's type anew.
    fn compare(&self, rhs: &Value) -> Result<Ordering, DynOrderError> {
        let rhs = self.cmp.ty().convert(rhs)?;
        Ok(self.cmp.compare_converted(&self.lhs, &rhs))
    }
}
