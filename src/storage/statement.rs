//! SQL fragments used by the storage collaborator to materialize tables.
//!
//! Only text is produced here; executing it is the collaborator's job.

use serde::{Deserialize, Serialize};

use crate::column::{Column, validate_columns};
use crate::debugger::Component;
use crate::error::{BridgeError, Result};
use crate::storage::schema::storage_schema;
use crate::bridge_debug;

/// What to do when the target table already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Drop and recreate.
    #[default]
    Replace,
    /// Keep existing rows, create only if missing.
    Append,
    /// Let the store reject an existing table.
    Fail,
}

pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn check_table_name(table: &str) -> Result<()> {
    if table.trim().is_empty() {
        return Err(BridgeError::InvalidTableName(table.to_string()));
    }
    Ok(())
}

/// Statements that prepare `table` for the given columns, in execution order.
pub fn create_table_sql(table: &str, columns: &[Column], mode: ImportMode) -> Result<Vec<String>> {
    check_table_name(table)?;
    validate_columns(columns)?;

    let definitions = storage_schema(columns)
        .iter()
        .map(|c| c.definition())
        .collect::<Vec<_>>()
        .join(", ");
    let quoted = quote_identifier(table);

    let statements = match mode {
        ImportMode::Replace => vec![
            format!("DROP TABLE IF EXISTS {quoted}"),
            format!("CREATE TABLE {quoted} ({definitions})"),
        ],
        ImportMode::Append => vec![format!("CREATE TABLE IF NOT EXISTS {quoted} ({definitions})")],
        ImportMode::Fail => vec![format!("CREATE TABLE {quoted} ({definitions})")],
    };

    bridge_debug!(Component::Storage, "table {quoted} prepared in {mode:?} mode");
    Ok(statements)
}

/// Positional insert for one row of `columns`.
pub fn insert_sql(table: &str, columns: &[Column]) -> Result<String> {
    check_table_name(table)?;
    validate_columns(columns)?;

    let names = columns
        .iter()
        .map(|c| quote_identifier(c.name()))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");

    Ok(format!(
        "INSERT INTO {} ({names}) VALUES ({placeholders})",
        quote_identifier(table)
    ))
}
