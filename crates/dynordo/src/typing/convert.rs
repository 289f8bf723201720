//! Value conversion along the compatibility lattice.
//!
//! ## Purpose
//!
//! This module performs the transformations that `check` admits: unwrapping
//! a candidate's pointer layers, widening numerics within their category,
//! carrying same-kind values across, and re-wrapping the result to the
//! target's indirection depth.
//!
//! ## Design notes
//!
//! * **Checked**: Every numeric step goes through `num_traits` checked casts;
//!   an inadmissible conversion surfaces as `ConversionFailed`, never as a
//!   silent truncation.
//! * **Width-gated**: The source width is compared against the target width
//!   before any cast, so an out-of-range *type* is rejected even when the
//!   particular value would fit.

// External dependencies
use num_traits::ToPrimitive;

// Internal dependencies
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;
use crate::typing::descriptor::{BaseKind, TypeDescriptor};

impl TypeDescriptor {
    /// Convert a value to this type.
    ///
    /// Fails with [`DynOrderError::ConversionFailed`] when the value's type
    /// does not satisfy `check` against this descriptor.
    pub fn convert(&self, value: &Value) -> Result<Value, DynOrderError> {
        self.try_convert(value)
            .ok_or_else(|| DynOrderError::ConversionFailed {
                from: describe(value),
                to: self.to_string(),
            })
    }

    // The conversion itself; `None` marks an inadmissible pairing.
    fn try_convert(&self, value: &Value) -> Option<Value> {
        // Strip the candidate's pointer layers down to its base value.
        let mut base = value;
        while let Value::Ptr(inner) = base {
            base = inner;
        }

        let converted = convert_base(&self.base, base)?;

        // Re-wrap to the target's indirection depth.
        let mut out = converted;
        for _ in 0..self.ptr_depth {
            out = Value::ptr(out);
        }
        Some(out)
    }
}

// Render a value's type for error messages, one `*` per pointer layer.
fn describe(value: &Value) -> String {
    let mut depth = 0;
    let mut cur = value;
    while let Value::Ptr(inner) = cur {
        depth += 1;
        cur = inner;
    }
    format!("{}{}", "*".repeat(depth), cur.kind_name())
}

// Convert a non-pointer value to a base kind.
fn convert_base(dst: &BaseKind, value: &Value) -> Option<Value> {
    match dst {
        BaseKind::Int(bits) => {
            if int_width(value)? > *bits {
                return None;
            }
            let wide = value.as_i64()?;
            Some(match bits {
                8 => Value::I8(wide.to_i8()?),
                16 => Value::I16(wide.to_i16()?),
                32 => Value::I32(wide.to_i32()?),
                64 => Value::I64(wide),
                _ => return None,
            })
        }
        BaseKind::Uint(bits) => {
            if uint_width(value)? > *bits {
                return None;
            }
            let wide = value.as_u64()?;
            Some(match bits {
                8 => Value::U8(wide.to_u8()?),
                16 => Value::U16(wide.to_u16()?),
                32 => Value::U32(wide.to_u32()?),
                64 => Value::U64(wide),
                _ => return None,
            })
        }
        BaseKind::Float(bits) => {
            if float_width(value)? > *bits {
                return None;
            }
            let wide = value.as_f64()?;
            Some(match bits {
                32 => Value::F32(wide.to_f32()?),
                64 => Value::F64(wide),
                _ => return None,
            })
        }
        BaseKind::Bool => value.as_bool().map(Value::Bool),
        BaseKind::Str => value.as_str().map(|s| Value::Str(s.into())),
        BaseKind::Bytes => value.as_bytes().map(|b| Value::Bytes(b.to_vec())),
        BaseKind::Time => value.as_time().map(Value::Time),
        BaseKind::Record(layout) => {
            let rec = value.as_record()?;

            // Records convert structurally and strictly: the field layouts
            // must be identical, with no widening inside.
            let candidate = rec
                .fields
                .iter()
                .map(TypeDescriptor::of)
                .collect::<Result<Vec<_>, _>>()
                .ok()?;
            if candidate != *layout {
                return None;
            }
            Some(Value::Record(rec.clone()))
        }
    }
}

// Bit width of a signed integer value.
fn int_width(value: &Value) -> Option<u8> {
    match value {
        Value::I8(_) => Some(8),
        Value::I16(_) => Some(16),
        Value::I32(_) => Some(32),
        Value::I64(_) => Some(64),
        _ => None,
    }
}

// Bit width of an unsigned integer value.
fn uint_width(value: &Value) -> Option<u8> {
    match value {
        Value::U8(_) => Some(8),
        Value::U16(_) => Some(16),
        Value::U32(_) => Some(32),
        Value::U64(_) => Some(64),
        _ => None,
    }
}

// Bit width of a float value.
fn float_width(value: &Value) -> Option<u8> {
    match value {
        Value::F32(_) => Some(32),
        Value::F64(_) => Some(64),
        _ => None,
    }
}
