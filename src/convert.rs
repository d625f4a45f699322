//! Whole-table conversion from raw to canonical values.

use crate::column::{Column, validate_columns};
use crate::debugger::Component;
use crate::error::{Result, SchemaMismatchError};
use crate::types::table::{RawTable, TypedTable};
use crate::{bridge_debug, bridge_error};

/// Checks declared columns against the raw data's shape: same count, and
/// same names wherever a column pins its source name.
pub fn check_schema(
    raw_names: &[String],
    columns: &[Column],
) -> std::result::Result<(), SchemaMismatchError> {
    if raw_names.len() != columns.len() {
        return Err(SchemaMismatchError::ColumnCount {
            declared: columns.len(),
            found: raw_names.len(),
        });
    }

    for (position, (column, raw_name)) in columns.iter().zip(raw_names).enumerate() {
        if let Some(source) = column.source() {
            if source != raw_name {
                return Err(SchemaMismatchError::ColumnOrder {
                    position,
                    expected: source.to_string(),
                    found: raw_name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Converts every raw column with its declared column's parser.
///
/// All or nothing: the first failing column aborts the conversion and no
/// partial table is returned.
pub fn convert(raw: &RawTable, columns: &[Column]) -> Result<TypedTable> {
    validate_columns(columns)?;
    check_schema(raw.names(), columns)?;

    let mut values = Vec::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        let series = raw.column(idx).unwrap_or_default();
        match column.to_canonical(series) {
            Ok(converted) => values.push(converted),
            Err(e) => {
                bridge_error!(Component::Query, "conversion aborted: {e}");
                return Err(e);
            }
        }
    }

    bridge_debug!(
        Component::Query,
        "converted {} rows x {} columns",
        raw.len(),
        columns.len()
    );
    Ok(TypedTable::new(columns.to_vec(), values))
}
