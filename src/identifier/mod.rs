//! Type inference over a bounded sample of raw values.
//!
//! Candidate types are tried in `DataType::IDENTIFICATION_ORDER`; the first
//! one whose parser accepts every present value wins. STRING accepts
//! anything, so identification is total. The result is a best guess for
//! the sample only: unseen rows can still fail conversion later.


use crate::column::Column;
use crate::column::format::{BooleanTokens, NumberFormat, TemporalFormat};
use crate::column::parser::{ColumnParser, DefaultParser};
use crate::config::InferenceConfig;
use crate::debugger::Component;
use crate::types::datatype::DataType;
use crate::types::table::RawTable;
use crate::types::value::{RawValue, Value};
use crate::{bridge_debug, bridge_info, bridge_trace, bridge_warn};

const BOOLEAN_TOKEN_PAIRS: [(&str, &str); 3] = [("Y", "N"), ("yes", "no"), ("T", "F")];

const DATETIME_PATTERNS: [&str; 4] = [
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y%m%d %H:%M:%S",
    "%Y%m%d %H:%M",
];

const DATE_PATTERNS: [&str; 2] = ["%Y/%m/%d", "%Y.%m.%d"];

/// Best-fit type of a sample, using the default parsers only.
pub fn identify(sample: &[RawValue]) -> DataType {
    let config = InferenceConfig {
        max_samples: usize::MAX,
        ..InferenceConfig::default()
    };
    identify_parser(sample, &config).data_type()
}

/// Best-fit parser of a sample. With `alternate_formats` enabled the
/// parser may carry a non-standard source format.
pub fn identify_parser(sample: &[RawValue], config: &InferenceConfig) -> DefaultParser {
    let bounded = &sample[..sample.len().min(config.max_samples)];
    let present: Vec<RawValue> = bounded
        .iter()
        .filter(|v| !is_missing(v, config))
        .cloned()
        .collect();

    if present.is_empty() {
        bridge_warn!(
            Component::Identifier,
            "no values in sample of {} rows, falling back to STRING",
            bounded.len()
        );
        return DefaultParser::string();
    }

    for data_type in DataType::IDENTIFICATION_ORDER {
        for parser in candidates(data_type, config.alternate_formats) {
            if accepts(&parser, &present) {
                bridge_debug!(Component::Identifier, "{data_type} accepted by {parser:?}");
                return parser;
            }
            bridge_trace!(Component::Identifier, "{parser:?} rejected sample");
        }
    }

    // unreachable in practice: STRING accepts every value
    DefaultParser::string()
}

/// Synthesizes a column from a sample of the raw column `name`.
///
/// Inferred columns are nullable, since a sample cannot prove the absence of
/// nulls in the rest of the data, and pinned to their raw column name.
pub fn identify_column(name: &str, sample: &[RawValue], config: &InferenceConfig) -> Column {
    let parser = identify_parser(sample, config);
    let column = Column::new(name, parser.data_type(), true)
        .with_builtin(parser)
        .with_source(name)
        .mark_inferred();

    bridge_info!(
        Component::Identifier,
        "column '{name}' identified as {}",
        column.data_type()
    );
    column
}

/// One inferred column per raw column, in raw order.
pub fn identify_columns(raw_sample: &RawTable, config: &InferenceConfig) -> Vec<Column> {
    raw_sample
        .names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let sample = raw_sample.sample(idx, config.max_samples).unwrap_or_default();
            identify_column(name, sample, config)
        })
        .collect()
}

fn is_missing(value: &RawValue, config: &InferenceConfig) -> bool {
    if config.empty_as_null {
        value.is_blank()
    } else {
        value.is_null()
    }
}

/// Every present value must convert to a present canonical value.
fn accepts(parser: &DefaultParser, present: &[RawValue]) -> bool {
    match parser.to_canonical(present) {
        Ok(values) => !values.iter().any(Value::is_null),
        Err(_) => false,
    }
}

fn candidates(data_type: DataType, alternate_formats: bool) -> Vec<DefaultParser> {
    let mut out = vec![data_type.default_parser().clone()];
    if !alternate_formats {
        return out;
    }

    match data_type {
        DataType::Boolean => out.extend(
            BOOLEAN_TOKEN_PAIRS
                .iter()
                .map(|(t, f)| DefaultParser::Boolean(BooleanTokens::custom(*t, *f))),
        ),
        DataType::Integer => out.extend(
            [NumberFormat::COMMA_THOUSANDS, NumberFormat::DOT_THOUSANDS]
                .into_iter()
                .map(DefaultParser::Integer),
        ),
        DataType::Number => out.extend(
            [
                NumberFormat::COMMA_THOUSANDS,
                NumberFormat::DOT_THOUSANDS,
                NumberFormat::COMMA_DECIMAL,
            ]
            .into_iter()
            .map(DefaultParser::Number),
        ),
        DataType::Datetime => out.extend(
            DATETIME_PATTERNS
                .iter()
                .map(|p| DefaultParser::Datetime(TemporalFormat::pattern(*p))),
        ),
        DataType::Date => out.extend(
            DATE_PATTERNS
                .iter()
                .map(|p| DefaultParser::Date(TemporalFormat::pattern(*p))),
        ),
        DataType::String => {}
    }
    out
}
