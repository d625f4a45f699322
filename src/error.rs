//! Error types surfaced by the type bridge.
//!
//! Identification never fails on data. Everything else propagates to the
//! caller unmodified: these are deterministic data-shape problems, so there
//! is nothing to retry.

use thiserror::Error;

use crate::types::{datatype::DataType, value::RawValue};

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BridgeError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),

    #[error(transparent)]
    UnsupportedParser(#[from] UnsupportedParserError),

    #[error("invalid format for column '{column}': {reason}")]
    InvalidFormat { column: String, reason: String },

    #[error("query is {state}, cannot {action}")]
    InvalidState {
        state: &'static str,
        action: &'static str,
    },

    #[error("invalid table name '{0}'")]
    InvalidTableName(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// A raw value could not be converted to its column's data type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "cannot convert {raw:?} at row {row}{} to {expected}: {reason}",
    column.as_ref().map(|c| format!(" of column '{c}'")).unwrap_or_default()
)]
pub struct CoercionError {
    /// Filled in once the failure is attributed to a column.
    pub column: Option<String>,
    pub row: usize,
    pub raw: RawValue,
    pub expected: DataType,
    pub reason: String,
}

impl CoercionError {
    pub fn new(expected: DataType, raw: &RawValue, reason: impl Into<String>) -> Self {
        Self {
            column: None,
            row: 0,
            raw: raw.clone(),
            expected,
            reason: reason.into(),
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn in_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatchError {
    #[error("{declared} columns declared but raw data exposes {found}")]
    ColumnCount { declared: usize, found: usize },

    #[error("column {position} is declared from '{expected}' but raw data names it '{found}'")]
    ColumnOrder {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("raw column '{column}' has {found} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("raw row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("column '{name}' is declared more than once")]
    DuplicateName { name: String },
}

/// A parser that cannot be bound to the column it was offered to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parser for column '{column}' declares '{declared}': {reason}")]
pub struct UnsupportedParserError {
    pub column: String,
    pub declared: String,
    pub reason: String,
}
