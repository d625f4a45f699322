mod helpers;

use centra::{DataType, InferenceConfig, identify, identify_columns};
use helpers::data::{localized_csv, orders_csv, users_native};

fn types(raw: &centra::RawTable, config: &InferenceConfig) -> Vec<DataType> {
    identify_columns(raw, config)
        .iter()
        .map(|c| c.data_type())
        .collect()
}

#[test]
fn text_export_is_typed() {
    helpers::init_debug_for_tests();

    assert_eq!(
        types(&orders_csv(), &InferenceConfig::default()),
        vec![
            DataType::Integer,
            DataType::String,
            DataType::Number,
            DataType::Boolean,
            DataType::Datetime,
            DataType::Date,
        ]
    );
}

#[test]
fn native_result_set_is_typed() {
    helpers::init_debug_for_tests();

    assert_eq!(
        types(&users_native(), &InferenceConfig::default()),
        vec![
            DataType::Integer,
            DataType::String,
            DataType::Integer,
            DataType::Boolean,
        ]
    );
}

#[test]
fn localized_export_needs_alternates() {
    helpers::init_debug_for_tests();

    let raw = localized_csv();
    assert_eq!(
        types(&raw, &InferenceConfig::default()),
        vec![DataType::String; 3]
    );

    let config = InferenceConfig {
        alternate_formats: true,
        ..InferenceConfig::default()
    };
    assert_eq!(
        types(&raw, &config),
        vec![DataType::Number, DataType::Boolean, DataType::Date]
    );
}

#[test]
fn identification_is_deterministic() {
    let raw = orders_csv();
    for idx in 0..raw.width() {
        let sample = raw.column(idx).unwrap();
        assert_eq!(identify(sample), identify(sample));
    }
}

#[test]
fn reference_samples() {
    use centra::RawValue;

    assert_eq!(
        identify(&[RawValue::Bool(true), RawValue::Bool(false), RawValue::Null]),
        DataType::Boolean
    );
    assert_eq!(
        identify(&[RawValue::Int(1), RawValue::Int(2), RawValue::Int(3)]),
        DataType::Integer
    );
    assert_eq!(
        identify(&[RawValue::Int(1), RawValue::Float(2.5)]),
        DataType::Number
    );
    assert_eq!(
        identify(&[RawValue::from("2024-01-01"), RawValue::from("2024-02-01")]),
        DataType::Date
    );
    assert_eq!(identify(&[RawValue::Null, RawValue::Null]), DataType::String);
}

#[test]
fn identify_columns_is_repeatable() {
    let raw = orders_csv();
    let config = InferenceConfig::default();
    assert_eq!(identify_columns(&raw, &config), identify_columns(&raw, &config));
}
