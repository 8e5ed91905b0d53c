use ops_dashboard::metrics::{OrderRecord, map_records};
use ops_dashboard::report::{
    DEFAULT_THIN_PROFIT_THRESHOLD, ReportTable, format_currency, format_percent, is_thin_profit,
};

#[test]
fn currency_and_percent_use_two_decimals() {
    assert_eq!(format_currency(123.456), "¥123.46");
    assert_eq!(format_currency(100.0), "¥100.00");
    assert_eq!(format_currency(-62.0), "¥-62.00");
    assert_eq!(format_percent(2.5), "2.50%");
    assert_eq!(format_percent(-31.0), "-31.00%");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(format_currency(-0.0), "¥0.00");
    assert_eq!(format_percent(-0.0), "0.00%");
}

#[test]
fn thin_profit_is_strictly_below_threshold() {
    assert!(is_thin_profit(99.99, DEFAULT_THIN_PROFIT_THRESHOLD));
    assert!(is_thin_profit(-5.0, DEFAULT_THIN_PROFIT_THRESHOLD));
    assert!(!is_thin_profit(100.0, DEFAULT_THIN_PROFIT_THRESHOLD));
}

#[test]
fn table_rows_follow_column_order_and_flag_thin_profit() {
    let orders = vec![
        OrderRecord::new("2023-02-01", "Manhattan", 100.0, 150.0, 2.0, 1.0).with_key(0),
        OrderRecord::new("2023-02-02", "Guomao", 200.0, 400.0, 1.0, 1.0).with_key(1),
    ];

    let table = ReportTable::build(&map_records(&orders), DEFAULT_THIN_PROFIT_THRESHOLD);

    assert_eq!(
        table.column_titles(),
        vec![
            "Date",
            "Region",
            "Order Cost",
            "Order Price",
            "Order Fee",
            "Regional Policy Fee",
            "Profit",
            "Profit Margin",
        ]
    );
    assert_eq!(
        table.rows[0].cells,
        vec![
            "2023-02-01",
            "Manhattan",
            "¥100.00",
            "¥150.00",
            "2.00%",
            "1.00%",
            "¥47.00",
            "47.00%",
        ]
    );
    assert!(table.rows[0].thin_margin);
    assert_eq!(table.rows[1].key, 1);
    assert_eq!(table.rows[1].cells[6], "¥196.00");
    assert!(!table.rows[1].thin_margin);
    assert_eq!(table.thin_margin_count(), 1);
}

#[test]
fn threshold_is_configurable() {
    let orders = vec![OrderRecord::new("2023-02-01", "Guomao", 100.0, 150.0, 2.0, 1.0)];

    let table = ReportTable::build(&map_records(&orders), 10.0);

    assert_eq!(table.thin_margin_count(), 0);
}

#[test]
fn table_serializes_for_external_widget() {
    let orders = vec![OrderRecord::new("2023-02-01", "Guomao", 100.0, 150.0, 2.0, 1.0)];
    let table = ReportTable::build(&map_records(&orders), DEFAULT_THIN_PROFIT_THRESHOLD);

    let json = table.to_json_pretty().expect("serialize table");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["columns"][2]["title"], "Order Cost");
    assert_eq!(value["columns"][2]["format"], "Currency");
    assert_eq!(value["rows"][0]["thinMargin"], true);
}
