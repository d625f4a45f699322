//! The unit of work handed to collaborators.
//!
//! A query moves `Defined -> Identified -> Converted`. Transitions take
//! `&mut self` and are not synchronized; use one query per concurrent
//! conversion.

pub mod params;


use std::collections::BTreeMap;
use std::fmt;

use crate::column::{Column, validate_columns};
use crate::config::{BridgeConfig, InferenceConfig};
use crate::convert::{check_schema, convert};
use crate::debugger::Component;
use crate::error::{BridgeError, Result};
use crate::identifier::identify_columns;
use crate::query::params::ParamValue;
use crate::storage::schema::{StorageColumn, storage_schema};
use crate::types::table::{RawTable, TypedTable};
use crate::{bridge_debug, bridge_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Defined,
    Identified,
    Converted,
}

impl QueryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryState::Defined => "defined",
            QueryState::Identified => "identified",
            QueryState::Converted => "converted",
        }
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Query {
    /// Query text or file path; opaque here.
    source: String,
    params: BTreeMap<String, ParamValue>,
    columns: Vec<Column>,
    explicit: bool,
    config: InferenceConfig,
    state: QueryState,
    result: Option<TypedTable>,
}

impl Query {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            params: BTreeMap::new(),
            columns: Vec::new(),
            explicit: false,
            config: InferenceConfig::default(),
            state: QueryState::Defined,
            result: None,
        }
    }

    /// Declares the columns up front; an empty list leaves them to the
    /// identifier.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.explicit = !columns.is_empty();
        self.columns = columns;
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Query over `source` with the inference settings and declared
    /// columns of a configuration.
    pub fn from_config(source: impl Into<String>, config: &BridgeConfig) -> Result<Self> {
        config.inference.validate()?;
        let query = Query::new(source).with_config(config.inference.clone());
        Ok(match config.declared_columns()? {
            Some(columns) => query.with_columns(columns),
            None => query,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_explicit_columns(&self) -> bool {
        self.explicit
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn result(&self) -> Option<&TypedTable> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<TypedTable> {
        self.result
    }

    /// Finalizes the columns against a raw sample.
    ///
    /// Declared columns are checked against the sample's shape; otherwise
    /// one column per raw column is inferred. Never fails on the values
    /// themselves.
    pub fn identify(&mut self, raw_sample: &RawTable) -> Result<&[Column]> {
        self.expect_state(QueryState::Defined, "identify columns")?;

        if self.explicit {
            validate_columns(&self.columns)?;
            check_schema(raw_sample.names(), &self.columns)?;
            bridge_debug!(
                Component::Query,
                "{} declared columns match raw data",
                self.columns.len()
            );
        } else {
            let inferred = identify_columns(raw_sample, &self.config);
            validate_columns(&inferred)?;
            self.columns = inferred;
        }

        self.state = QueryState::Identified;
        bridge_info!(
            Component::Query,
            "query identified with {} columns",
            self.columns.len()
        );
        Ok(&self.columns)
    }

    /// Converts the full raw data with the finalized columns.
    ///
    /// On failure the query stays identified and holds no result.
    pub fn convert(&mut self, raw: &RawTable) -> Result<&TypedTable> {
        self.expect_state(QueryState::Identified, "convert data")?;

        let table = convert(raw, &self.columns)?;
        self.state = QueryState::Converted;
        bridge_info!(Component::Query, "query converted {} rows", table.len());
        Ok(self.result.insert(table))
    }

    /// Identifies on the leading sample of `raw` and converts all of it.
    pub fn execute(&mut self, raw: &RawTable) -> Result<&TypedTable> {
        self.expect_state(QueryState::Defined, "execute")?;
        let sample = raw.head(self.config.max_samples);
        self.identify(&sample)?;
        self.convert(raw)
    }

    /// Storage schema of the finalized columns.
    pub fn storage_schema(&self) -> Result<Vec<StorageColumn>> {
        if self.state == QueryState::Defined {
            return Err(BridgeError::InvalidState {
                state: self.state.as_str(),
                action: "derive a storage schema",
            });
        }
        Ok(storage_schema(&self.columns))
    }

    fn expect_state(&self, expected: QueryState, action: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(BridgeError::InvalidState {
                state: self.state.as_str(),
                action,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
