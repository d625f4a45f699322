use std::fmt;

use crate::column::Column;
use crate::storage::statement::quote_identifier;
use crate::types::datatype::StorageAffinity;

/// Storage-side definition of one column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageColumn {
    pub name: String,
    pub affinity: StorageAffinity,
    pub nullable: bool,
}

impl StorageColumn {
    /// Column clause of a table definition, e.g. `"id" INTEGER NOT NULL`.
    pub fn definition(&self) -> String {
        let mut out = format!("{} {}", quote_identifier(&self.name), self.affinity);
        if !self.nullable {
            out.push_str(" NOT NULL");
        }
        out
    }
}

impl From<&Column> for StorageColumn {
    fn from(column: &Column) -> Self {
        Self {
            name: column.name().to_string(),
            affinity: column.storage_affinity(),
            nullable: column.is_nullable(),
        }
    }
}

impl fmt::Display for StorageColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}

/// One storage column per column, same order.
pub fn storage_schema(columns: &[Column]) -> Vec<StorageColumn> {
    columns.iter().map(StorageColumn::from).collect()
}
