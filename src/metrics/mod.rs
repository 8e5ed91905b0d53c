//! Order profit metrics.
//!
//! Every function here is pure: the same inputs always produce the same
//! record, and nothing is validated or rejected. Negative profit and margin
//! values are meaningful (a loss), and a zero cost yields a zero margin
//! instead of an infinite one.

use serde::{Deserialize, Serialize};

/// Raw per-order input as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Positional key assigned by the producer.
    #[serde(default)]
    pub key: usize,
    pub date: String,
    pub region: String,
    pub cost: f64,
    pub price: f64,
    /// Order fee as a percentage of cost (0-100).
    pub order_fee_rate_pct: f64,
    /// Regional policy fee as a percentage of cost (0-100).
    pub regional_policy_fee_rate_pct: f64,
}

impl OrderRecord {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        region: impl Into<String>,
        cost: f64,
        price: f64,
        order_fee_rate_pct: f64,
        regional_policy_fee_rate_pct: f64,
    ) -> Self {
        Self {
            key: 0,
            date: date.into(),
            region: region.into(),
            cost,
            price,
            order_fee_rate_pct,
            regional_policy_fee_rate_pct,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: usize) -> Self {
        self.key = key;
        self
    }
}

/// `OrderRecord` enriched with derived profit figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    #[serde(flatten)]
    pub order: OrderRecord,
    pub profit: f64,
    /// Profit relative to cost, in percent.
    pub profit_margin: f64,
}

impl MetricsRecord {
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}

/// Fee charged as a percentage of cost.
#[must_use]
pub fn fee_amount(cost: f64, rate_pct: f64) -> f64 {
    cost * rate_pct / 100.0
}

/// `price - cost - order fee - regional fee`, where both fees are charged on cost.
#[must_use]
pub fn compute_profit(
    cost: f64,
    price: f64,
    order_fee_rate_pct: f64,
    regional_policy_fee_rate_pct: f64,
) -> f64 {
    let order_fee = fee_amount(cost, order_fee_rate_pct);
    let regional_fee = fee_amount(cost, regional_policy_fee_rate_pct);
    price - cost - order_fee - regional_fee
}

/// Profit as a percentage of cost; exactly `0.0` when `cost == 0`.
#[must_use]
pub fn compute_profit_margin(profit: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    (profit / cost) * 100.0
}

#[must_use]
pub fn to_metrics_record(order: &OrderRecord) -> MetricsRecord {
    let profit = compute_profit(
        order.cost,
        order.price,
        order.order_fee_rate_pct,
        order.regional_policy_fee_rate_pct,
    );
    MetricsRecord {
        order: order.clone(),
        profit,
        profit_margin: compute_profit_margin(profit, order.cost),
    }
}

/// Maps orders 1:1 into metrics records, preserving order.
#[must_use]
pub fn map_records(orders: &[OrderRecord]) -> Vec<MetricsRecord> {
    orders.iter().map(to_metrics_record).collect()
}
