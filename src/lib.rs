pub mod config;
pub mod error;

pub mod column;
pub mod convert;
pub mod debugger;
pub mod identifier;
pub mod query;
pub mod storage;
pub mod types;

pub use column::Column;
pub use column::parser::{ColumnParser, DefaultParser};
pub use config::{BridgeConfig, InferenceConfig};
pub use convert::convert;
pub use error::{BridgeError, CoercionError, Result, SchemaMismatchError, UnsupportedParserError};
pub use identifier::{identify, identify_column, identify_columns};
pub use query::{Query, QueryState, params::ParamValue};
pub use storage::{StorageColumn, storage_schema};
pub use types::datatype::{DataType, MemoryKind, StorageAffinity};
pub use types::table::{RawTable, TypedTable};
pub use types::value::{RawValue, Value};
