//! Canonical data types understood by the bridge.
//!
//! Every kind maps to exactly one storage affinity and exactly one memory
//! kind. The tables below are the only place those mappings live.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::parser::DefaultParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Integer,
    Number,
    String,
    Boolean,
    Datetime,
    Date,
}

/// Column type category of the relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageAffinity {
    Integer,
    Real,
    Text,
}

/// In-memory value representation of a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryKind {
    Int64,
    Float64,
    Utf8,
    Boolean,
    Timestamp,
    Date,
}

static DEFAULT_PARSERS: [DefaultParser; 6] = [
    DefaultParser::integer(),
    DefaultParser::number(),
    DefaultParser::string(),
    DefaultParser::boolean(),
    DefaultParser::datetime(),
    DefaultParser::date(),
];

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Integer,
        DataType::Number,
        DataType::String,
        DataType::Boolean,
        DataType::Datetime,
        DataType::Date,
    ];

    /// Order in which the identifier tries candidate types. Narrow types
    /// come before their supersets; STRING always matches so it is last.
    pub const IDENTIFICATION_ORDER: [DataType; 6] = [
        DataType::Boolean,
        DataType::Integer,
        DataType::Number,
        DataType::Datetime,
        DataType::Date,
        DataType::String,
    ];

    pub const fn to_storage_affinity(self) -> StorageAffinity {
        match self {
            DataType::Integer => StorageAffinity::Integer,
            DataType::Number => StorageAffinity::Real,
            DataType::String => StorageAffinity::Text,
            // 0/1 keeps filtering and aggregation numeric at the storage level
            DataType::Boolean => StorageAffinity::Integer,
            DataType::Datetime => StorageAffinity::Text,
            DataType::Date => StorageAffinity::Text,
        }
    }

    pub const fn to_memory_kind(self) -> MemoryKind {
        match self {
            DataType::Integer => MemoryKind::Int64,
            DataType::Number => MemoryKind::Float64,
            DataType::String => MemoryKind::Utf8,
            DataType::Boolean => MemoryKind::Boolean,
            DataType::Datetime => MemoryKind::Timestamp,
            DataType::Date => MemoryKind::Date,
        }
    }

    /// Process-wide parser used when a column does not bring its own.
    pub fn default_parser(self) -> &'static DefaultParser {
        &DEFAULT_PARSERS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Datetime => "datetime",
            DataType::Date => "date",
        }
    }
}

impl MemoryKind {
    pub const fn to_data_type(self) -> DataType {
        match self {
            MemoryKind::Int64 => DataType::Integer,
            MemoryKind::Float64 => DataType::Number,
            MemoryKind::Utf8 => DataType::String,
            MemoryKind::Boolean => DataType::Boolean,
            MemoryKind::Timestamp => DataType::Datetime,
            MemoryKind::Date => DataType::Date,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "INTEGER"),
            DataType::Number => write!(f, "NUMBER"),
            DataType::String => write!(f, "STRING"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Datetime => write!(f, "DATETIME"),
            DataType::Date => write!(f, "DATE"),
        }
    }
}

impl fmt::Display for StorageAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAffinity::Integer => write!(f, "INTEGER"),
            StorageAffinity::Real => write!(f, "REAL"),
            StorageAffinity::Text => write!(f, "TEXT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data type '{0}'")]
pub struct UnknownDataType(pub String);

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DataType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDataType(s.to_string()))
    }
}
