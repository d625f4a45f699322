use crate::column::Column;
use crate::error::Result;
use crate::types::datatype::StorageAffinity;
use crate::types::table::{RawTable, TypedTable};
use crate::types::value::{DATE_FORMAT, DATETIME_FORMAT, RawValue, Value};

/// A cell as the relational store holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl StorageValue {
    pub fn affinity(&self) -> Option<StorageAffinity> {
        match self {
            StorageValue::Null => None,
            StorageValue::Integer(_) => Some(StorageAffinity::Integer),
            StorageValue::Real(_) => Some(StorageAffinity::Real),
            StorageValue::Text(_) => Some(StorageAffinity::Text),
        }
    }

    fn to_raw(&self) -> RawValue {
        match self {
            StorageValue::Null => RawValue::Null,
            StorageValue::Integer(v) => RawValue::Int(*v),
            StorageValue::Real(v) => RawValue::Float(*v),
            StorageValue::Text(v) => RawValue::Text(v.clone()),
        }
    }
}

pub struct ValueCodec;

impl ValueCodec {
    /// Canonical value to storage cell. Total.
    pub fn encode(value: &Value) -> StorageValue {
        match value {
            Value::Null => StorageValue::Null,
            Value::Integer(v) => StorageValue::Integer(*v),
            Value::Number(v) => StorageValue::Real(*v),
            Value::String(v) => StorageValue::Text(v.clone()),
            Value::Boolean(v) => StorageValue::Integer(i64::from(*v)),
            Value::Datetime(v) => StorageValue::Text(v.format(DATETIME_FORMAT).to_string()),
            Value::Date(v) => StorageValue::Text(v.format(DATE_FORMAT).to_string()),
        }
    }

    /// Row-major cells, ready to bind to an insert statement.
    pub fn encode_table(table: &TypedTable) -> Vec<Vec<StorageValue>> {
        table
            .rows()
            .map(|row| row.into_iter().map(Self::encode).collect())
            .collect()
    }

    /// Reads one stored cell back into `column`'s canonical type.
    ///
    /// Stored cells are always in the canonical storage format, so the data
    /// type's default parser applies whatever format the column was loaded
    /// with.
    pub fn decode(cell: &StorageValue, column: &Column) -> Result<Value> {
        let values = Self::decode_series(std::slice::from_ref(cell), column)?;
        Ok(values.into_iter().next().unwrap_or(Value::Null))
    }

    /// Reads row-major stored cells back into a typed table.
    pub fn decode_rows(rows: &[Vec<StorageValue>], columns: &[Column]) -> Result<TypedTable> {
        let names = columns.iter().map(|c| c.name().to_string()).collect();
        let raw_rows = rows
            .iter()
            .map(|row| row.iter().map(StorageValue::to_raw).collect())
            .collect();
        let raw = RawTable::from_rows(names, raw_rows)?;

        let values = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let series = raw.column(idx).unwrap_or_default();
                Self::decode_raw(series, column)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypedTable::new(columns.to_vec(), values))
    }

    fn decode_series(cells: &[StorageValue], column: &Column) -> Result<Vec<Value>> {
        let raw: Vec<RawValue> = cells.iter().map(StorageValue::to_raw).collect();
        Self::decode_raw(&raw, column)
    }

    fn decode_raw(raw: &[RawValue], column: &Column) -> Result<Vec<Value>> {
        let stored = Column::new(column.name(), column.data_type(), column.is_nullable());
        stored.to_canonical(raw)
    }
}
