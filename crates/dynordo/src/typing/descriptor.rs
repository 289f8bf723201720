//! Type descriptors and the compatibility lattice.
//!
//! ## Purpose
//!
//! This module defines the canonical description of a comparable type: its
//! non-pointer base kind plus pointer-indirection depth, and the `check`
//! relation deciding whether a candidate type may be converted to it.
//!
//! ## Key concepts
//!
//! A candidate type is accepted when any of the following holds:
//!
//! 1. The base kinds are identical (pointer depths are tracked but need not
//!    match; only the bases must align).
//! 2. Both are records with identical field layouts; nominal names are not
//!    part of the descriptor, so differently-named but structurally identical
//!    records compare equal.
//! 3. Both are numerics of the same category (signed integer, unsigned
//!    integer, float) and the candidate's bit width does not exceed the
//!    target's. The asymmetry is deliberate: widening is always
//!    representable, narrowing silently loses precision.
//!
//! ## Invariants
//!
//! * A base kind is never a pointer and never a sequence other than bytes.
//! * Descriptors are immutable once constructed.
//!
//! ## Non-goals
//!
//! * This module does not transform values; `convert` does.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::DynOrderError;
use crate::primitives::value::Value;

// ============================================================================
// Base Kind
// ============================================================================

/// The non-pointer base kind of a comparable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseKind {
    /// Signed integer of the given bit width (8, 16, 32, or 64).
    Int(u8),
    /// Unsigned integer of the given bit width (8, 16, 32, or 64).
    Uint(u8),
    /// Float of the given bit width (32 or 64).
    Float(u8),
    /// Boolean.
    Bool,
    /// Text.
    Str,
    /// Byte sequence, the only sequence kind admitted as a base.
    Bytes,
    /// Timestamp.
    Time,
    /// Record, described structurally by its ordered field layout.
    Record(Vec<TypeDescriptor>),
}

// Numeric conversion categories. Complex numbers are deliberately absent:
// they admit no meaningful total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumCategory {
    Signed,
    Unsigned,
    Float,
}

// The numeric category and bit width of a base kind, if it is numeric.
fn num_category(kind: &BaseKind) -> Option<(NumCategory, u8)> {
    match kind {
        BaseKind::Int(bits) => Some((NumCategory::Signed, *bits)),
        BaseKind::Uint(bits) => Some((NumCategory::Unsigned, *bits)),
        BaseKind::Float(bits) => Some((NumCategory::Float, *bits)),
        _ => None,
    }
}

// ============================================================================
// Type Descriptor
// ============================================================================

/// Canonical description of a comparable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// The non-pointer base kind.
    pub base: BaseKind,

    /// How many pointer layers wrap the base.
    pub ptr_depth: usize,
}

impl TypeDescriptor {
    /// Describe a base kind with no pointer indirection.
    pub fn new(base: BaseKind) -> Self {
        Self { base, ptr_depth: 0 }
    }

    /// Describe the type of a value.
    ///
    /// Pointer layers are stripped and counted until a non-pointer base is
    /// reached. Sequences of values are not comparable types and fail with
    /// [`DynOrderError::UnsupportedType`]; byte sequences are.
    pub fn of(value: &Value) -> Result<Self, DynOrderError> {
        let mut ptr_depth = 0;
        let mut cur = value;
        loop {
            match cur {
                Value::Ptr(inner) => {
                    ptr_depth += 1;
                    cur = inner;
                }
                Value::Seq(_) => {
                    return Err(DynOrderError::UnsupportedType {
                        type_name: cur.kind_name().into(),
                    })
                }
                other => {
                    return Ok(Self {
                        base: Self::base_of(other)?,
                        ptr_depth,
                    })
                }
            }
        }
    }

    // The base kind of a non-pointer value.
    fn base_of(value: &Value) -> Result<BaseKind, DynOrderError> {
        Ok(match value {
            Value::I8(_) => BaseKind::Int(8),
            Value::I16(_) => BaseKind::Int(16),
            Value::I32(_) => BaseKind::Int(32),
            Value::I64(_) => BaseKind::Int(64),
            Value::U8(_) => BaseKind::Uint(8),
            Value::U16(_) => BaseKind::Uint(16),
            Value::U32(_) => BaseKind::Uint(32),
            Value::U64(_) => BaseKind::Uint(64),
            Value::F32(_) => BaseKind::Float(32),
            Value::F64(_) => BaseKind::Float(64),
            Value::Bool(_) => BaseKind::Bool,
            Value::Str(_) => BaseKind::Str,
            Value::Bytes(_) => BaseKind::Bytes,
            Value::Time(_) => BaseKind::Time,
            Value::Record(rec) => BaseKind::Record(
                rec.fields
                    .iter()
                    .map(TypeDescriptor::of)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::Ptr(_) | Value::Seq(_) => {
                return Err(DynOrderError::UnsupportedType {
                    type_name: value.kind_name().into(),
                })
            }
        })
    }

    /// Check whether a candidate type may be converted to this one.
    pub fn check(&self, candidate: &TypeDescriptor) -> bool {
        kind_assignable(&candidate.base, &self.base)
    }
}

// Check whether `src` may be assigned to `dst`.
fn kind_assignable(src: &BaseKind, dst: &BaseKind) -> bool {
    // Identical bases, including structurally identical record layouts.
    if src == dst {
        return true;
    }

    // Numerics of the same category may widen, never narrow.
    match (num_category(src), num_category(dst)) {
        (Some((src_cat, src_bits)), Some((dst_cat, dst_bits))) => {
            src_cat == dst_cat && src_bits <= dst_bits
        }
        _ => false,
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", "*".repeat(self.ptr_depth), self.base)
    }
}

impl Display for BaseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Int(bits) => write!(f, "i{bits}"),
            Self::Uint(bits) => write!(f, "u{bits}"),
            Self::Float(bits) => write!(f, "f{bits}"),
            Self::Bool => write!(f, "bool"),
            Self::Str => write!(f, "str"),
            Self::Bytes => write!(f, "bytes"),
            Self::Time => write!(f, "time"),
            Self::Record(fields) => {
                write!(f, "record{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
