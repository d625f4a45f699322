//! Typed column definitions.
//!
//! A single `Column` record covers every data type; the per-type
//! constructors fix the data type so it cannot disagree with the parser
//! bound to it.

pub mod format;
pub mod parser;
pub mod spec;


use std::collections::HashSet;
use std::sync::Arc;

use crate::column::format::{BooleanTokens, NumberFormat, TemporalFormat};
use crate::column::parser::{BoundParser, ColumnParser, DefaultParser};
use crate::debugger::Component;
use crate::error::{BridgeError, CoercionError, Result, SchemaMismatchError, UnsupportedParserError};
use crate::types::datatype::{DataType, StorageAffinity};
use crate::types::value::{RawValue, Value};
use crate::{bridge_debug, bridge_warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data_type: DataType,
    nullable: bool,
    /// `None` means the data type's default parser.
    parser: Option<BoundParser>,
    null_default: Option<Value>,
    source: Option<String>,
    inferred: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
            parser: None,
            null_default: None,
            source: None,
            inferred: false,
        }
    }

    pub fn integer(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::Integer, nullable)
    }

    pub fn number(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::Number, nullable)
    }

    pub fn string(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::String, nullable)
    }

    pub fn boolean(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::Boolean, nullable)
    }

    pub fn datetime(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::Datetime, nullable)
    }

    pub fn date(name: impl Into<String>, nullable: bool) -> Self {
        Self::new(name, DataType::Date, nullable)
    }

    /// Attaches a caller-supplied parser. The parser must declare the
    /// column's data type.
    pub fn with_parser(mut self, parser: Arc<dyn ColumnParser>) -> Result<Self> {
        let declared = parser.data_type();
        if declared != self.data_type {
            return Err(UnsupportedParserError {
                column: self.name,
                declared: declared.to_string(),
                reason: format!("column is declared as {}", self.data_type),
            }
            .into());
        }
        self.parser = Some(BoundParser::Custom(parser));
        Ok(self)
    }

    pub fn with_number_format(self, format: NumberFormat) -> Result<Self> {
        format.validate().map_err(|reason| self.invalid_format(reason))?;
        let parser = match self.data_type {
            DataType::Integer => DefaultParser::Integer(format),
            DataType::Number => DefaultParser::Number(format),
            other => return Err(self.invalid_format(format!("{other} column has no number format"))),
        };
        Ok(self.with_builtin(parser))
    }

    pub fn with_boolean_tokens(
        self,
        true_value: impl Into<String>,
        false_value: impl Into<String>,
    ) -> Result<Self> {
        if self.data_type != DataType::Boolean {
            let reason = format!("{} column has no boolean tokens", self.data_type);
            return Err(self.invalid_format(reason));
        }
        let tokens = BooleanTokens::custom(true_value, false_value);
        tokens.validate().map_err(|reason| self.invalid_format(reason))?;
        Ok(self.with_builtin(DefaultParser::Boolean(tokens)))
    }

    /// Attaches a strftime-style pattern to a DATETIME or DATE column.
    pub fn with_format(self, pattern: impl Into<String>) -> Result<Self> {
        let format = TemporalFormat::pattern(pattern);
        let parser = match self.data_type {
            DataType::Datetime => {
                format
                    .validate_datetime()
                    .map_err(|reason| self.invalid_format(reason))?;
                DefaultParser::Datetime(format)
            }
            DataType::Date => {
                format
                    .validate_date()
                    .map_err(|reason| self.invalid_format(reason))?;
                DefaultParser::Date(format)
            }
            other => return Err(self.invalid_format(format!("{other} column has no temporal format"))),
        };
        Ok(self.with_builtin(parser))
    }

    /// Value substituted for nulls during conversion, before the
    /// nullability check.
    pub fn with_null_default(mut self, value: Value) -> Result<Self> {
        if value.memory_kind() != Some(self.data_type.to_memory_kind()) {
            let reason = format!("null default {value} is not a {} value", self.data_type);
            return Err(self.invalid_format(reason));
        }
        self.null_default = Some(value);
        Ok(self)
    }

    /// Raw column name expected at this column's position.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn with_builtin(mut self, parser: DefaultParser) -> Self {
        debug_assert_eq!(parser.data_type(), self.data_type);
        self.parser = if parser.is_standard() {
            None
        } else {
            Some(BoundParser::Builtin(parser))
        };
        self
    }

    pub(crate) fn mark_inferred(mut self) -> Self {
        self.inferred = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn null_default(&self) -> Option<&Value> {
        self.null_default.as_ref()
    }

    pub fn is_inferred(&self) -> bool {
        self.inferred
    }

    pub fn bound_parser(&self) -> Option<&BoundParser> {
        self.parser.as_ref()
    }

    /// Parser in effect: the bound one, or the data type's default.
    pub fn parser(&self) -> &dyn ColumnParser {
        match &self.parser {
            Some(bound) => bound.as_parser(),
            None => self.data_type.default_parser(),
        }
    }

    pub fn storage_affinity(&self) -> StorageAffinity {
        self.data_type.to_storage_affinity()
    }

    /// Converts this column's raw series.
    ///
    /// Applies the parser, substitutes the null default, then enforces
    /// nullability. Every failure names this column and the offending row.
    pub fn to_canonical(&self, raw: &[RawValue]) -> Result<Vec<Value>> {
        let parser = self.parser();
        let mut values = parser
            .to_canonical(raw)
            .map_err(|e| e.in_column(&self.name))?;

        if values.len() != raw.len() {
            return Err(SchemaMismatchError::RaggedColumn {
                column: self.name.clone(),
                expected: raw.len(),
                found: values.len(),
            }
            .into());
        }

        if self.parser.as_ref().is_some_and(BoundParser::is_custom) {
            self.check_kinds(&values)?;
        }

        if let Some(default) = &self.null_default {
            for value in values.iter_mut().filter(|v| v.is_null()) {
                *value = default.clone();
            }
        }

        if !self.nullable {
            if let Some(row) = values.iter().position(Value::is_null) {
                bridge_warn!(
                    Component::Column,
                    "null at row {row} of non-nullable column '{}'",
                    self.name
                );
                return Err(CoercionError::new(self.data_type, &raw[row], "null value in non-nullable column")
                    .at_row(row)
                    .in_column(&self.name)
                    .into());
            }
        }

        bridge_debug!(
            Component::Column,
            "converted {} values of column '{}' to {}",
            values.len(),
            self.name,
            self.data_type
        );
        Ok(values)
    }

    pub fn from_canonical(&self, values: &[Value]) -> Vec<RawValue> {
        self.parser().from_canonical(values)
    }

    fn check_kinds(&self, values: &[Value]) -> Result<()> {
        let expected = self.data_type.to_memory_kind();
        let stray = values
            .iter()
            .find(|v| v.memory_kind().is_some_and(|kind| kind != expected));

        match stray {
            Some(value) => Err(UnsupportedParserError {
                column: self.name.clone(),
                declared: self.parser().data_type().to_string(),
                reason: format!("produced {value} for a {} column", self.data_type),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn invalid_format(&self, reason: impl Into<String>) -> BridgeError {
        BridgeError::InvalidFormat {
            column: self.name.clone(),
            reason: reason.into(),
        }
    }
}

/// Checks the identity invariants of a column list: non-empty, unique names.
pub fn validate_columns(columns: &[Column]) -> std::result::Result<(), SchemaMismatchError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        if column.name.trim().is_empty() {
            return Err(SchemaMismatchError::EmptyName { position });
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SchemaMismatchError::DuplicateName {
                name: column.name.clone(),
            });
        }
    }
    Ok(())
}
