//! The dynamic value representation.
//!
//! ## Purpose
//!
//! This module defines [`Value`], the runtime representation that dynamic
//! comparators operate on: primitive numerics of every width, text and byte
//! sequences, booleans, timestamps, records, pointer indirection, and
//! sequences of values.
//!
//! ## Design notes
//!
//! * **Plain data**: A value carries no behavior beyond accessors; typing
//!   rules live in the typing layer.
//! * **Width-preserving**: Each numeric width is its own variant, so the
//!   conversion lattice can reason about bit widths.
//! * **Accessors**: The `as_*` accessors return `Option`s and are the
//!   building blocks for comparison functions (`Option` ordering makes them
//!   total without unwrapping).

// External dependencies
use chrono::{DateTime, Utc};

// ============================================================================
// Value
// ============================================================================

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Boolean (`false` orders before `true`).
    Bool(bool),
    /// Text.
    Str(String),
    /// Byte sequence.
    Bytes(Vec<u8>),
    /// Timestamp.
    Time(DateTime<Utc>),
    /// Named aggregate with ordered fields.
    Record(Record),
    /// One layer of pointer indirection.
    Ptr(Box<Value>),
    /// Sequence of values.
    Seq(Vec<Value>),
}

/// A named aggregate value.
///
/// The name is a nominal tag only; compatibility between records is decided
/// structurally, by field layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Nominal type name.
    pub name: String,
    /// Ordered field values.
    pub fields: Vec<Value>,
}

impl Value {
    /// Wrap a value in one layer of pointer indirection.
    pub fn ptr(value: Value) -> Value {
        Value::Ptr(Box::new(value))
    }

    /// Build a record value.
    pub fn record(name: &str, fields: Vec<Value>) -> Value {
        Value::Record(Record {
            name: name.into(),
            fields,
        })
    }

    /// The name of the value's own kind, pointer layers not included.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Time(_) => "time",
            Value::Record(_) => "record",
            Value::Ptr(_) => "pointer",
            Value::Seq(_) => "sequence",
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The signed integer payload, any width.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// The unsigned integer payload, any width.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(v) => Some(u64::from(*v)),
            Value::U16(v) => Some(u64::from(*v)),
            Value::U32(v) => Some(u64::from(*v)),
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// The float payload, any width.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// The byte-sequence payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// The timestamp payload.
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Time(v) => Some(*v),
            _ => None,
        }
    }

    /// The record payload.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions From Native Types
// ============================================================================

macro_rules! value_from {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => Str,
    DateTime<Utc> => Time,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}
