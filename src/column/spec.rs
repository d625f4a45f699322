//! Declarative column definitions, as found in configuration files.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::column::format::NumberFormat;
use crate::error::{BridgeError, UnsupportedParserError};
use crate::types::datatype::DataType;

fn default_nullable() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,

    /// Data type name, e.g. `integer` or `datetime`.
    #[serde(rename = "type")]
    pub data_type: String,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// strftime pattern for DATETIME and DATE columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thousands_separator: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_value: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.name().to_string(),
            nullable: true,
            source: None,
            format: None,
            decimal_separator: None,
            thousands_separator: None,
            true_value: None,
            false_value: None,
        }
    }
}

impl TryFrom<&ColumnSpec> for Column {
    type Error = BridgeError;

    fn try_from(spec: &ColumnSpec) -> Result<Self, Self::Error> {
        let data_type: DataType =
            spec.data_type
                .parse()
                .map_err(|_| UnsupportedParserError {
                    column: spec.name.clone(),
                    declared: spec.data_type.clone(),
                    reason: "not a recognized data type".into(),
                })?;

        let mut column = Column::new(&spec.name, data_type, spec.nullable);

        if spec.decimal_separator.is_some() || spec.thousands_separator.is_some() {
            let format = NumberFormat::new(
                spec.decimal_separator.unwrap_or('.'),
                spec.thousands_separator,
            );
            column = column.with_number_format(format)?;
        }

        match (&spec.true_value, &spec.false_value) {
            (Some(t), Some(f)) => column = column.with_boolean_tokens(t, f)?,
            (None, None) => {}
            _ => {
                return Err(BridgeError::InvalidFormat {
                    column: spec.name.clone(),
                    reason: "true_value and false_value must be given together".into(),
                });
            }
        }

        if let Some(pattern) = &spec.format {
            column = column.with_format(pattern)?;
        }

        if let Some(source) = &spec.source {
            column = column.with_source(source);
        }

        Ok(column)
    }
}

impl TryFrom<ColumnSpec> for Column {
    type Error = BridgeError;

    fn try_from(spec: ColumnSpec) -> Result<Self, Self::Error> {
        Column::try_from(&spec)
    }
}
