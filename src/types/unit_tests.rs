#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::column::Column;
    use crate::column::parser::ColumnParser;
    use crate::error::SchemaMismatchError;
    use crate::types::datatype::{DataType, MemoryKind, StorageAffinity};
    use crate::types::table::{RawTable, TypedTable};
    use crate::types::value::{RawValue, Value};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /* ============================================================
     * DataType mappings
     * ============================================================
     */

    #[test]
    fn storage_affinity_table() {
        assert_eq!(DataType::Integer.to_storage_affinity(), StorageAffinity::Integer);
        assert_eq!(DataType::Number.to_storage_affinity(), StorageAffinity::Real);
        assert_eq!(DataType::String.to_storage_affinity(), StorageAffinity::Text);
        assert_eq!(DataType::Boolean.to_storage_affinity(), StorageAffinity::Integer);
        assert_eq!(DataType::Datetime.to_storage_affinity(), StorageAffinity::Text);
        assert_eq!(DataType::Date.to_storage_affinity(), StorageAffinity::Text);
    }

    #[test]
    fn memory_kind_is_a_bijection() {
        for dt in DataType::ALL {
            assert_eq!(dt.to_memory_kind().to_data_type(), dt);
        }
        assert_eq!(DataType::Datetime.to_memory_kind(), MemoryKind::Timestamp);
    }

    #[test]
    fn default_parser_matches_its_type() {
        for dt in DataType::ALL {
            let parser = dt.default_parser();
            assert_eq!(parser.data_type(), dt);
            assert!(parser.is_standard());
        }
    }

    #[test]
    fn default_parser_is_shared() {
        let a = DataType::Integer.default_parser() as *const _;
        let b = DataType::Integer.default_parser() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn data_type_names_parse_case_insensitively() {
        assert_eq!("Integer".parse::<DataType>(), Ok(DataType::Integer));
        assert_eq!(" DATETIME ".parse::<DataType>(), Ok(DataType::Datetime));
        assert!("decimal".parse::<DataType>().is_err());
        assert_eq!(DataType::Boolean.to_string(), "BOOLEAN");
        assert_eq!(StorageAffinity::Real.to_string(), "REAL");
    }

    #[test]
    fn identification_order_ends_with_string() {
        assert_eq!(DataType::IDENTIFICATION_ORDER[0], DataType::Boolean);
        assert_eq!(DataType::IDENTIFICATION_ORDER[5], DataType::String);
    }

    /* ============================================================
     * Values
     * ============================================================
     */

    #[test]
    fn blank_covers_null_and_whitespace() {
        assert!(RawValue::Null.is_blank());
        assert!(RawValue::from("  ").is_blank());
        assert!(!RawValue::from("x").is_blank());
        assert!(!RawValue::Int(0).is_blank());
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
        assert_eq!(RawValue::from(Some(3_i64)), RawValue::Int(3));
    }

    #[test]
    fn value_memory_kinds() {
        assert_eq!(Value::Integer(1).memory_kind(), Some(MemoryKind::Int64));
        assert_eq!(Value::Null.memory_kind(), None);
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Value::Date(d).to_raw(), RawValue::Date(d));
        assert_eq!(Value::Date(d).to_string(), "2024-02-29");
    }

    /* ============================================================
     * Tables
     * ============================================================
     */

    #[test]
    fn raw_table_from_rows_is_columnar() {
        let raw = RawTable::from_rows(
            names(&["a", "b"]),
            vec![
                vec![RawValue::Int(1), "x".into()],
                vec![RawValue::Int(2), "y".into()],
            ],
        )
        .unwrap();

        assert_eq!(raw.len(), 2);
        assert_eq!(raw.width(), 2);
        assert_eq!(raw.column_by_name("b").unwrap(), &[RawValue::from("x"), RawValue::from("y")]);
        assert_eq!(raw.rows().count(), 2);
    }

    #[test]
    fn raw_table_rejects_ragged_rows() {
        let err = RawTable::from_rows(
            names(&["a", "b"]),
            vec![vec![RawValue::Int(1), RawValue::Int(2)], vec![RawValue::Int(3)]],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaMismatchError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn raw_table_rejects_ragged_columns() {
        let err = RawTable::from_columns(
            names(&["a", "b"]),
            vec![vec![RawValue::Int(1)], vec![]],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaMismatchError::RaggedColumn { .. }));

        let err = RawTable::from_columns(names(&["a"]), vec![]).unwrap_err();
        assert!(matches!(err, SchemaMismatchError::ColumnCount { .. }));
    }

    #[test]
    fn head_and_sample_are_bounded() {
        let raw = RawTable::from_columns(
            names(&["a"]),
            vec![(0..10).map(RawValue::Int).collect()],
        )
        .unwrap();

        assert_eq!(raw.head(3).len(), 3);
        assert_eq!(raw.head(50).len(), 10);
        assert_eq!(raw.sample(0, 4).unwrap().len(), 4);
        assert!(raw.sample(1, 4).is_none());
    }

    #[test]
    fn typed_table_accessors() {
        let table = TypedTable::new(
            vec![Column::integer("id", false), Column::string("name", true)],
            vec![
                vec![Value::Integer(1), Value::Integer(2)],
                vec![Value::String("a".into()), Value::Null],
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, "id"), Some(&Value::Integer(2)));
        assert_eq!(table.get(1, "name"), Some(&Value::Null));
        assert!(table.row(2).is_none());

        let raw = table.to_raw();
        assert_eq!(raw.names(), &names(&["id", "name"])[..]);
        assert_eq!(raw.column(1).unwrap(), &[RawValue::from("a"), RawValue::Null]);
    }
}
