use centra::storage::{StorageValue, ValueCodec};
use centra::{Column, Query, RawTable, TypedTable};

/// Plays the storage collaborator: runs a query and keeps the encoded rows.
#[allow(dead_code)]
pub struct TestBridge {
    pub query: Query,
    pub stored: Vec<Vec<StorageValue>>,
}

#[allow(dead_code)]
impl TestBridge {
    pub fn new(source: &str) -> Self {
        Self {
            query: Query::new(source),
            stored: Vec::new(),
        }
    }

    pub fn with_columns(source: &str, columns: Vec<Column>) -> Self {
        Self {
            query: Query::new(source).with_columns(columns),
            stored: Vec::new(),
        }
    }

    pub fn load(&mut self, raw: &RawTable) -> Result<&TypedTable, anyhow::Error> {
        let table = self.query.execute(raw)?;
        self.stored = ValueCodec::encode_table(table);
        Ok(table)
    }

    pub fn reload(&self) -> Result<TypedTable, anyhow::Error> {
        Ok(ValueCodec::decode_rows(&self.stored, self.query.columns())?)
    }
}
