//! Values crossing the bridge.
//!
//! `RawValue` is what a collaborator hands over, untyped and as the source
//! delivered it. `Value` is the canonical in-memory representation a column
//! normalizes to.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::datatype::MemoryKind;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
}

impl RawValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Null, or text with nothing but whitespace in it.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(v: NaiveDate) -> Self {
        RawValue::Date(v)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(v: NaiveDateTime) -> Self {
        RawValue::Datetime(v)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawValue::Null)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "NULL"),
            RawValue::Bool(v) => write!(f, "{v}"),
            RawValue::Int(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
            RawValue::Text(v) => write!(f, "{v}"),
            RawValue::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            RawValue::Datetime(v) => write!(f, "{}", v.format(DATETIME_FORMAT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Number(f64),
    String(String),
    Boolean(bool),
    Datetime(NaiveDateTime),
    Date(NaiveDate),
    Null,
}

impl Value {
    /// Memory kind of the value, `None` for NULL.
    pub fn memory_kind(&self) -> Option<MemoryKind> {
        match self {
            Value::Integer(_) => Some(MemoryKind::Int64),
            Value::Number(_) => Some(MemoryKind::Float64),
            Value::String(_) => Some(MemoryKind::Utf8),
            Value::Boolean(_) => Some(MemoryKind::Boolean),
            Value::Datetime(_) => Some(MemoryKind::Timestamp),
            Value::Date(_) => Some(MemoryKind::Date),
            Value::Null => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Native raw form of the value. Total.
    pub fn to_raw(&self) -> RawValue {
        match self {
            Value::Integer(v) => RawValue::Int(*v),
            Value::Number(v) => RawValue::Float(*v),
            Value::String(v) => RawValue::Text(v.clone()),
            Value::Boolean(v) => RawValue::Bool(*v),
            Value::Datetime(v) => RawValue::Datetime(*v),
            Value::Date(v) => RawValue::Date(*v),
            Value::Null => RawValue::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Datetime(v) => write!(f, "{}", v.format(DATETIME_FORMAT)),
            Value::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
        }
    }
}
