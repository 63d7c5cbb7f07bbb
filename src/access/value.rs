use crate::predicate::TypedLiteral;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Declared column types of a loaded table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Column with no values at all (Arrow `Null`)
    Null,
    Boolean,
    /// Every signed integer width plus `u8`..`u32`
    Int64,
    UInt64,
    /// `f16`, `f32` and `f64`
    Float64,
    Utf8,
    /// Dates, times, timestamps and durations, held as ISO-8601 text
    Temporal,
    /// Anything else, held as its display text
    Other,
}

impl DataType {
    /// Short dtype label shown under column headers
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Boolean => "bool",
            DataType::Int64 => "i64",
            DataType::UInt64 => "u64",
            DataType::Float64 => "f64",
            DataType::Utf8 => "str",
            DataType::Temporal => "temporal",
            DataType::Other => "other",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int64 | DataType::UInt64 | DataType::Float64)
    }

    /// Types whose cells are held as `Value::String`
    pub fn is_textual(&self) -> bool {
        matches!(self, DataType::Utf8 | DataType::Temporal | DataType::Other)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell of a materialised table
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
}

impl Value {
    /// Get the data type of this value
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int64(_) => Some(DataType::Int64),
            Value::UInt64(_) => Some(DataType::UInt64),
            Value::Float64(_) => Some(DataType::Float64),
            Value::String(_) => Some(DataType::Utf8),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int64(i) => write!(f, "{}", i),
            Value::UInt64(u) => write!(f, "{}", u),
            Value::Float64(v) => f.write_str(&format_float(*v)),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Int64(i) => serializer.serialize_i64(*i),
            Value::UInt64(u) => serializer.serialize_u64(*u),
            // serde_json writes non-finite floats as null
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

/// Render a float so integral values keep a fractional digit (`3.0`, not `3`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Outcome of comparing a cell against a typed literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Ordered(Ordering),
    /// The cell is NULL
    Null,
    /// The literal's kind cannot be compared with the cell's kind
    Incompatible,
}

/// Order two floats totally: NaN equals NaN and sorts above every other value
fn float_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compare a cell with a literal using the literal's native ordering.
///
/// Numbers compare across integer and float kinds: integer pairs compare
/// exactly, anything involving a float compares as `f64` with NaN as the
/// largest value. Booleans compare with booleans and string-held cells with
/// string literals. Every other pairing is `Incompatible`; nothing is coerced
/// from text.
pub fn compare_with_literal(cell: &Value, literal: &TypedLiteral) -> Comparison {
    let ordering = match (cell, literal) {
        (Value::Null, _) => return Comparison::Null,
        (Value::Int64(a), TypedLiteral::Int(b)) => a.cmp(b),
        (Value::UInt64(a), TypedLiteral::Int(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Int64(a), TypedLiteral::Float(b)) => float_order(*a as f64, *b),
        (Value::UInt64(a), TypedLiteral::Float(b)) => float_order(*a as f64, *b),
        (Value::Float64(a), TypedLiteral::Int(b)) => float_order(*a, *b as f64),
        (Value::Float64(a), TypedLiteral::Float(b)) => float_order(*a, *b),
        (Value::Boolean(a), TypedLiteral::Bool(b)) => a.cmp(b),
        (Value::String(a), TypedLiteral::String(b)) => a.as_str().cmp(b.as_str()),
        _ => return Comparison::Incompatible,
    };

    Comparison::Ordered(ordering)
}
