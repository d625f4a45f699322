use centra::{RawTable, RawValue};

fn table(names: &[&str], rows: Vec<Vec<RawValue>>) -> RawTable {
    RawTable::from_rows(names.iter().map(|n| n.to_string()).collect(), rows).unwrap()
}

/// CSV-like export: every cell is text.
#[allow(dead_code)]
pub fn orders_csv() -> RawTable {
    table(
        &["order_id", "customer", "amount", "paid", "ordered_at", "ship_date"],
        vec![
            text_row(&["1", "Alice", "19.99", "true", "2024-01-05 10:15:00", "2024-01-07"]),
            text_row(&["2", "Bob", "5", "false", "2024-01-06 08:00:00", ""]),
            text_row(&["3", "Carol", "120.5", "TRUE", "2024-01-06T17:45:30", "2024-01-09"]),
            text_row(&["4", "", "0", "false", "2024-01-07 09:00", ""]),
        ],
    )
}

/// Driver result set: natively typed cells.
#[allow(dead_code)]
pub fn users_native() -> RawTable {
    table(
        &["id", "name", "age", "active"],
        vec![
            vec![RawValue::Int(1), "Alice".into(), RawValue::Int(30), RawValue::Bool(true)],
            vec![RawValue::Int(2), "Bob".into(), RawValue::Int(15), RawValue::Bool(false)],
            vec![RawValue::Int(3), "Carol".into(), RawValue::Null, RawValue::Bool(true)],
        ],
    )
}

/// European spreadsheet export.
#[allow(dead_code)]
pub fn localized_csv() -> RawTable {
    table(
        &["price", "flag", "day"],
        vec![
            text_row(&["1.234,50", "Y", "2023/12/24"]),
            text_row(&["99,95", "N", "2023/12/25"]),
            text_row(&["12.000,00", "Y", "2023/12/31"]),
        ],
    )
}

fn text_row(cells: &[&str]) -> Vec<RawValue> {
    cells.iter().map(|c| RawValue::from(*c)).collect()
}
