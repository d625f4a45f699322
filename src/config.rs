//! Bridge configuration.
//!
//! Every field has a default, so an empty document is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::column::{Column, spec::ColumnSpec, validate_columns};
use crate::error::{BridgeError, Result};

pub const DEFAULT_MAX_SAMPLES: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Rows per column inspected by the identifier.
    pub max_samples: usize,

    /// Blank texts count as nulls during identification.
    pub empty_as_null: bool,

    /// Try common non-ISO / localized formats before moving to the next
    /// candidate type.
    pub alternate_formats: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            empty_as_null: true,
            alternate_formats: false,
        }
    }
}

impl InferenceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_samples == 0 {
            return Err(BridgeError::Config(
                "inference.max_samples must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub inference: InferenceConfig,

    /// Explicit column declarations; empty means "infer".
    pub columns: Vec<ColumnSpec>,
}

impl BridgeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: BridgeConfig =
            toml::from_str(text).map_err(|e| BridgeError::Config(e.to_string()))?;
        config.inference.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Builds the declared columns, `None` when nothing is declared.
    pub fn declared_columns(&self) -> Result<Option<Vec<Column>>> {
        if self.columns.is_empty() {
            return Ok(None);
        }
        let columns = self
            .columns
            .iter()
            .map(Column::try_from)
            .collect::<Result<Vec<_>>>()?;
        validate_columns(&columns)?;
        Ok(Some(columns))
    }
}
