//! Coercion strategies between raw values and canonical values.

use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::column::format::{BooleanTokens, NumberFormat, TemporalFormat};
use crate::error::CoercionError;
use crate::types::datatype::DataType;
use crate::types::value::{DATE_FORMAT, DATETIME_FORMAT, RawValue, Value};

static INTEGER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("integer literal pattern"));

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("number literal pattern")
});

const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Converts a column's raw values into its data type's canonical form and
/// back.
///
/// Implementors provide the value-level pair; the bulk methods pass nulls
/// through untouched and attribute failures to their row index.
pub trait ColumnParser: fmt::Debug + Send + Sync {
    fn data_type(&self) -> DataType;

    /// Coerces one non-null raw value.
    fn parse_value(&self, raw: &RawValue) -> Result<Value, CoercionError>;

    /// Renders one non-null canonical value. Must be total.
    fn render_value(&self, value: &Value) -> RawValue;

    fn to_canonical(&self, raw: &[RawValue]) -> Result<Vec<Value>, CoercionError> {
        raw.iter()
            .enumerate()
            .map(|(row, value)| {
                if value.is_null() {
                    Ok(Value::Null)
                } else {
                    self.parse_value(value).map_err(|e| e.at_row(row))
                }
            })
            .collect()
    }

    fn from_canonical(&self, values: &[Value]) -> Vec<RawValue> {
        values
            .iter()
            .map(|value| {
                if value.is_null() {
                    RawValue::Null
                } else {
                    self.render_value(value)
                }
            })
            .collect()
    }
}

/// Built-in parser of each data type, optionally tuned to a source format.
///
/// Standard-format parsers render back to native raw values; formatted ones
/// render back to text in their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultParser {
    Integer(NumberFormat),
    Number(NumberFormat),
    String,
    Boolean(BooleanTokens),
    Datetime(TemporalFormat),
    Date(TemporalFormat),
}

impl DefaultParser {
    pub const fn integer() -> Self {
        DefaultParser::Integer(NumberFormat::STANDARD)
    }

    pub const fn number() -> Self {
        DefaultParser::Number(NumberFormat::STANDARD)
    }

    pub const fn string() -> Self {
        DefaultParser::String
    }

    pub const fn boolean() -> Self {
        DefaultParser::Boolean(BooleanTokens::Standard)
    }

    pub const fn datetime() -> Self {
        DefaultParser::Datetime(TemporalFormat::ISO)
    }

    pub const fn date() -> Self {
        DefaultParser::Date(TemporalFormat::ISO)
    }

    /// True when this is exactly the data type's process-wide default.
    pub fn is_standard(&self) -> bool {
        self == self.data_type().default_parser()
    }
}

impl ColumnParser for DefaultParser {
    fn data_type(&self) -> DataType {
        match self {
            DefaultParser::Integer(_) => DataType::Integer,
            DefaultParser::Number(_) => DataType::Number,
            DefaultParser::String => DataType::String,
            DefaultParser::Boolean(_) => DataType::Boolean,
            DefaultParser::Datetime(_) => DataType::Datetime,
            DefaultParser::Date(_) => DataType::Date,
        }
    }

    fn parse_value(&self, raw: &RawValue) -> Result<Value, CoercionError> {
        if raw.is_null() {
            return Ok(Value::Null);
        }
        // a blank cell in a typed column is a missing value, not a bad one
        if !matches!(self, DefaultParser::String) && raw.is_blank() {
            return Ok(Value::Null);
        }

        match self {
            DefaultParser::Integer(format) => parse_integer(format, raw),
            DefaultParser::Number(format) => parse_number(format, raw),
            DefaultParser::String => Ok(Value::String(stringify(raw))),
            DefaultParser::Boolean(tokens) => parse_boolean(tokens, raw),
            DefaultParser::Datetime(format) => parse_datetime(format, raw),
            DefaultParser::Date(format) => parse_date(format, raw),
        }
    }

    fn render_value(&self, value: &Value) -> RawValue {
        match (self, value) {
            (DefaultParser::Integer(format), Value::Integer(v)) if !format.is_standard() => {
                RawValue::Text(format.render_integer(*v))
            }
            (DefaultParser::Number(format), Value::Number(v)) if !format.is_standard() => {
                RawValue::Text(format.render_number(*v))
            }
            (
                DefaultParser::Boolean(BooleanTokens::Custom {
                    true_value,
                    false_value,
                }),
                Value::Boolean(v),
            ) => RawValue::Text(if *v { true_value } else { false_value }.clone()),
            (DefaultParser::Datetime(format), Value::Datetime(v)) => match format.as_pattern() {
                Some(pattern) => RawValue::Text(v.format(pattern).to_string()),
                None => RawValue::Datetime(*v),
            },
            (DefaultParser::Date(format), Value::Date(v)) => match format.as_pattern() {
                Some(pattern) => RawValue::Text(v.format(pattern).to_string()),
                None => RawValue::Date(*v),
            },
            _ => value.to_raw(),
        }
    }
}

fn parse_integer(format: &NumberFormat, raw: &RawValue) -> Result<Value, CoercionError> {
    let fail = |reason: &str| CoercionError::new(DataType::Integer, raw, reason);

    match raw {
        RawValue::Int(v) => Ok(Value::Integer(*v)),
        RawValue::Float(v) => {
            if v.is_finite() && v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 {
                Ok(Value::Integer(*v as i64))
            } else {
                Err(fail("not an integral value"))
            }
        }
        RawValue::Text(text) => {
            let normalized = format
                .normalize(text)
                .ok_or_else(|| fail("malformed digit grouping"))?;
            if !INTEGER_LITERAL.is_match(&normalized) {
                return Err(fail("not an integer literal"));
            }
            normalized
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| fail(&e.to_string()))
        }
        _ => Err(fail("not a numeric value")),
    }
}

fn parse_number(format: &NumberFormat, raw: &RawValue) -> Result<Value, CoercionError> {
    let fail = |reason: &str| CoercionError::new(DataType::Number, raw, reason);

    match raw {
        RawValue::Int(v) => Ok(Value::Number(*v as f64)),
        RawValue::Float(v) => Ok(Value::Number(*v)),
        RawValue::Text(text) => {
            let normalized = format
                .normalize(text)
                .ok_or_else(|| fail("malformed digit grouping"))?;
            if !NUMBER_LITERAL.is_match(&normalized) {
                return Err(fail("not a numeric literal"));
            }
            normalized
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|e| fail(&e.to_string()))
        }
        _ => Err(fail("not a numeric value")),
    }
}

fn parse_boolean(tokens: &BooleanTokens, raw: &RawValue) -> Result<Value, CoercionError> {
    let fail = |reason: &str| CoercionError::new(DataType::Boolean, raw, reason);

    match (tokens, raw) {
        (_, RawValue::Bool(v)) => Ok(Value::Boolean(*v)),
        (BooleanTokens::Standard, RawValue::Int(0)) => Ok(Value::Boolean(false)),
        (BooleanTokens::Standard, RawValue::Int(1)) => Ok(Value::Boolean(true)),
        (BooleanTokens::Standard, RawValue::Text(text)) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") || text == "1" {
                Ok(Value::Boolean(true))
            } else if text.eq_ignore_ascii_case("false") || text == "0" {
                Ok(Value::Boolean(false))
            } else {
                Err(fail("not a boolean literal"))
            }
        }
        (
            BooleanTokens::Custom {
                true_value,
                false_value,
            },
            RawValue::Text(text),
        ) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case(true_value.trim()) {
                Ok(Value::Boolean(true))
            } else if text.eq_ignore_ascii_case(false_value.trim()) {
                Ok(Value::Boolean(false))
            } else {
                Err(fail(&format!(
                    "expected '{true_value}' or '{false_value}'"
                )))
            }
        }
        _ => Err(fail("not a boolean value")),
    }
}

fn parse_datetime(format: &TemporalFormat, raw: &RawValue) -> Result<Value, CoercionError> {
    let fail = |reason: &str| CoercionError::new(DataType::Datetime, raw, reason);

    match raw {
        RawValue::Datetime(v) => Ok(Value::Datetime(*v)),
        RawValue::Date(_) => Err(fail("date without time part")),
        RawValue::Text(text) => {
            let text = text.trim();
            let parsed = match format.as_pattern() {
                Some(pattern) => NaiveDateTime::parse_from_str(text, pattern).ok(),
                None => parse_iso_datetime(text),
            };
            parsed
                .map(Value::Datetime)
                .ok_or_else(|| fail("not a datetime in the expected format"))
        }
        _ => Err(fail("not a temporal value")),
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

fn parse_date(format: &TemporalFormat, raw: &RawValue) -> Result<Value, CoercionError> {
    let fail = |reason: &str| CoercionError::new(DataType::Date, raw, reason);

    match raw {
        RawValue::Date(v) => Ok(Value::Date(*v)),
        RawValue::Datetime(_) => Err(fail("datetime would lose its time part")),
        RawValue::Text(text) => {
            let pattern = format.as_pattern().unwrap_or(DATE_FORMAT);
            NaiveDate::parse_from_str(text.trim(), pattern)
                .map(Value::Date)
                .map_err(|_| fail("not a date in the expected format"))
        }
        _ => Err(fail("not a temporal value")),
    }
}

fn stringify(raw: &RawValue) -> String {
    match raw {
        RawValue::Text(v) => v.clone(),
        RawValue::Date(v) => v.format(DATE_FORMAT).to_string(),
        RawValue::Datetime(v) => v.format(DATETIME_FORMAT).to_string(),
        other => other.to_string(),
    }
}

/// Parser attached to a column: a built-in one or a caller-supplied
/// strategy.
#[derive(Clone)]
pub enum BoundParser {
    Builtin(DefaultParser),
    Custom(Arc<dyn ColumnParser>),
}

impl BoundParser {
    pub fn as_parser(&self) -> &dyn ColumnParser {
        match self {
            BoundParser::Builtin(p) => p,
            BoundParser::Custom(p) => p.as_ref(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, BoundParser::Custom(_))
    }
}

impl fmt::Debug for BoundParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundParser::Builtin(p) => f.debug_tuple("Builtin").field(p).finish(),
            BoundParser::Custom(p) => f.debug_tuple("Custom").field(p).finish(),
        }
    }
}

impl PartialEq for BoundParser {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BoundParser::Builtin(a), BoundParser::Builtin(b)) => a == b,
            // custom strategies are opaque: same instance or nothing
            (BoundParser::Custom(a), BoundParser::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
