use approx::assert_relative_eq;
use ops_dashboard::metrics::{
    OrderRecord, compute_profit, compute_profit_margin, map_records, to_metrics_record,
};
use proptest::prelude::*;

fn order(date: &str, cost: f64, price: f64) -> OrderRecord {
    OrderRecord::new(date, "Guomao", cost, price, 2.0, 1.0)
}

#[test]
fn profit_subtracts_both_fees_charged_on_cost() {
    let profit = compute_profit(100.0, 150.0, 2.0, 1.0);
    assert_relative_eq!(profit, 47.0, epsilon = 1e-9);
    assert_relative_eq!(compute_profit_margin(profit, 100.0), 47.0, epsilon = 1e-9);
}

#[test]
fn profit_can_be_negative() {
    let profit = compute_profit(200.0, 150.0, 3.0, 3.0);
    assert_relative_eq!(profit, -62.0, epsilon = 1e-9);
    assert_relative_eq!(compute_profit_margin(profit, 200.0), -31.0, epsilon = 1e-9);
}

#[test]
fn margin_is_exactly_zero_for_zero_cost() {
    assert_eq!(compute_profit_margin(47.0, 0.0), 0.0);
    assert_eq!(compute_profit_margin(-1_000.0, 0.0), 0.0);
    assert_eq!(compute_profit_margin(0.0, 0.0), 0.0);
}

#[test]
fn metrics_record_keeps_every_order_field() {
    let input = order("2023-02-03", 100.0, 150.0).with_key(7);

    let record = to_metrics_record(&input);

    assert_eq!(record.order, input);
    assert_relative_eq!(record.profit, 47.0, epsilon = 1e-9);
    assert_relative_eq!(record.profit_margin, 47.0, epsilon = 1e-9);
    assert!(!record.is_loss());
    assert_eq!(to_metrics_record(&input), record);
}

#[test]
fn zero_cost_order_has_zero_margin() {
    let record = to_metrics_record(&order("2023-02-01", 0.0, 25.0));
    assert_relative_eq!(record.profit, 25.0, epsilon = 1e-9);
    assert_eq!(record.profit_margin, 0.0);
}

#[test]
fn map_records_of_empty_input_is_empty() {
    assert!(map_records(&[]).is_empty());
}

#[test]
fn metrics_record_serializes_flat_camel_case() {
    let record = to_metrics_record(&order("2023-02-01", 100.0, 150.0).with_key(3));
    let value = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(value["key"], 3);
    assert_eq!(value["date"], "2023-02-01");
    assert_eq!(value["region"], "Guomao");
    assert_eq!(value["orderFeeRatePct"], 2.0);
    assert_eq!(value["regionalPolicyFeeRatePct"], 1.0);
    assert!(value.get("profit").is_some());
    assert!(value.get("profitMargin").is_some());
    assert!(value.get("order").is_none());
}

proptest! {
    #[test]
    fn margin_matches_profit_over_cost(
        cost in 0.01f64..10_000.0,
        price in -10_000.0f64..10_000.0,
        order_fee in 0.0f64..100.0,
        regional_fee in 0.0f64..100.0
    ) {
        let profit = compute_profit(cost, price, order_fee, regional_fee);
        let margin = compute_profit_margin(profit, cost);
        prop_assert!(profit.is_finite());
        prop_assert!((margin - (profit / cost) * 100.0).abs() <= 1e-9);
    }

    #[test]
    fn map_records_preserves_length_and_order(
        costs in prop::collection::vec(0.0f64..1_000.0, 0..64)
    ) {
        let orders: Vec<OrderRecord> = costs
            .iter()
            .enumerate()
            .map(|(i, cost)| {
                OrderRecord::new(format!("day-{i}"), "Manhattan", *cost, cost * 1.5, 2.0, 1.0)
                    .with_key(i)
            })
            .collect();

        let records = map_records(&orders);

        prop_assert_eq!(records.len(), orders.len());
        for (record, order) in records.iter().zip(&orders) {
            prop_assert_eq!(&record.order.date, &order.date);
            prop_assert_eq!(record.order.key, order.key);
        }
    }
}
