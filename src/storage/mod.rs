//! Bridge towards the relational store: schema, statement fragments and
//! cell encoding.

pub mod codec;
pub mod schema;
pub mod statement;


pub use codec::{StorageValue, ValueCodec};
pub use schema::{StorageColumn, storage_schema};
pub use statement::{ImportMode, create_table_sql, insert_sql, quote_identifier};
