//! Tabular containers on both sides of the bridge.
//!
//! Both tables are columnar: parsers work on whole series, and sampling a
//! column is a slice.

use crate::column::Column;
use crate::error::SchemaMismatchError;
use crate::types::value::{RawValue, Value};

/// Untyped data as delivered by a connector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    names: Vec<String>,
    columns: Vec<Vec<RawValue>>,
    len: usize,
}

impl RawTable {
    pub fn from_columns(
        names: Vec<String>,
        columns: Vec<Vec<RawValue>>,
    ) -> Result<Self, SchemaMismatchError> {
        if names.len() != columns.len() {
            return Err(SchemaMismatchError::ColumnCount {
                declared: names.len(),
                found: columns.len(),
            });
        }

        let len = columns.first().map(Vec::len).unwrap_or(0);
        for (name, column) in names.iter().zip(&columns) {
            if column.len() != len {
                return Err(SchemaMismatchError::RaggedColumn {
                    column: name.clone(),
                    expected: len,
                    found: column.len(),
                });
            }
        }

        Ok(Self {
            names,
            columns,
            len,
        })
    }

    /// Builds a table from row-major data, the shape most drivers return.
    pub fn from_rows(
        names: Vec<String>,
        rows: Vec<Vec<RawValue>>,
    ) -> Result<Self, SchemaMismatchError> {
        let width = names.len();
        let mut columns: Vec<Vec<RawValue>> = (0..width)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SchemaMismatchError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let len = columns.first().map(Vec::len).unwrap_or(0);
        Ok(Self {
            names,
            columns,
            len,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn width(&self) -> usize {
        self.names.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn column(&self, idx: usize) -> Option<&[RawValue]> {
        self.columns.get(idx).map(Vec::as_slice)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&[RawValue]> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.column(idx)
    }

    /// Bounded prefix of one column.
    pub fn sample(&self, idx: usize, max_rows: usize) -> Option<&[RawValue]> {
        self.column(idx).map(|c| &c[..c.len().min(max_rows)])
    }

    /// Copy of the first `max_rows` rows.
    pub fn head(&self, max_rows: usize) -> RawTable {
        let len = self.len.min(max_rows);
        RawTable {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c[..len].to_vec()).collect(),
            len,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&RawValue>> + '_ {
        (0..self.len).map(move |row| self.columns.iter().map(|c| &c[row]).collect())
    }
}

/// Canonical data produced by a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTable {
    columns: Vec<Column>,
    values: Vec<Vec<Value>>,
    len: usize,
}

impl TypedTable {
    /// Callers guarantee one value series per column, all of equal length.
    pub(crate) fn new(columns: Vec<Column>, values: Vec<Vec<Value>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        let len = values.first().map(Vec::len).unwrap_or(0);
        Self {
            columns,
            values,
            len,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn values_at(&self, idx: usize) -> Option<&[Value]> {
        self.values.get(idx).map(Vec::as_slice)
    }

    pub fn values(&self, name: &str) -> Option<&[Value]> {
        self.column_index(name).and_then(|idx| self.values_at(idx))
    }

    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        self.values(name).and_then(|v| v.get(row))
    }

    pub fn row(&self, row: usize) -> Option<Vec<&Value>> {
        if row >= self.len {
            return None;
        }
        Some(self.values.iter().map(|c| &c[row]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.len).map(move |row| self.values.iter().map(|c| &c[row]).collect())
    }

    /// Renders every column back through its parser's `from_canonical`.
    pub fn to_raw(&self) -> RawTable {
        let names = self.columns.iter().map(|c| c.name().to_string()).collect();
        let columns = self
            .columns
            .iter()
            .zip(&self.values)
            .map(|(column, values)| column.parser().from_canonical(values))
            .collect();

        RawTable {
            names,
            columns,
            len: self.len,
        }
    }
}
