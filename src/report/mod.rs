//! Display rules for the order metrics table.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::metrics::MetricsRecord;

pub const CURRENCY_SYMBOL: &str = "¥";

/// Profit below this absolute amount is flagged as a thin margin.
pub const DEFAULT_THIN_PROFIT_THRESHOLD: f64 = 100.0;

/// `¥` followed by the value with two decimals.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", normalize_zero(value))
}

/// Two decimals followed by `%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", normalize_zero(value))
}

#[must_use]
pub fn is_thin_profit(profit: f64, threshold: f64) -> bool {
    profit < threshold
}

// `-0.0` would otherwise print as "-0.00".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnFormat {
    Text,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    Date,
    Region,
    Cost,
    Price,
    OrderFeeRatePct,
    RegionalPolicyFeeRatePct,
    Profit,
    ProfitMargin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub title: &'static str,
    pub field: ReportField,
    pub format: ColumnFormat,
}

impl ReportColumn {
    #[must_use]
    pub const fn new(title: &'static str, field: ReportField, format: ColumnFormat) -> Self {
        Self {
            title,
            field,
            format,
        }
    }

    #[must_use]
    pub fn render(&self, record: &MetricsRecord) -> String {
        let order = &record.order;
        let value = match self.field {
            ReportField::Date => return order.date.clone(),
            ReportField::Region => return order.region.clone(),
            ReportField::Cost => order.cost,
            ReportField::Price => order.price,
            ReportField::OrderFeeRatePct => order.order_fee_rate_pct,
            ReportField::RegionalPolicyFeeRatePct => order.regional_policy_fee_rate_pct,
            ReportField::Profit => record.profit,
            ReportField::ProfitMargin => record.profit_margin,
        };
        match self.format {
            ColumnFormat::Text => value.to_string(),
            ColumnFormat::Currency => format_currency(value),
            ColumnFormat::Percent => format_percent(value),
        }
    }
}

pub const REPORT_COLUMNS: [ReportColumn; 8] = [
    ReportColumn::new("Date", ReportField::Date, ColumnFormat::Text),
    ReportColumn::new("Region", ReportField::Region, ColumnFormat::Text),
    ReportColumn::new("Order Cost", ReportField::Cost, ColumnFormat::Currency),
    ReportColumn::new("Order Price", ReportField::Price, ColumnFormat::Currency),
    ReportColumn::new(
        "Order Fee",
        ReportField::OrderFeeRatePct,
        ColumnFormat::Percent,
    ),
    ReportColumn::new(
        "Regional Policy Fee",
        ReportField::RegionalPolicyFeeRatePct,
        ColumnFormat::Percent,
    ),
    ReportColumn::new("Profit", ReportField::Profit, ColumnFormat::Currency),
    ReportColumn::new(
        "Profit Margin",
        ReportField::ProfitMargin,
        ColumnFormat::Percent,
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub key: usize,
    pub cells: Vec<String>,
    /// Rendered with the alternate highlight color.
    pub thin_margin: bool,
}

/// Formatted rows ready for an external table widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    #[must_use]
    pub fn build(records: &[MetricsRecord], thin_profit_threshold: f64) -> Self {
        let columns = REPORT_COLUMNS.to_vec();
        let rows = records
            .iter()
            .map(|record| ReportRow {
                key: record.order.key,
                cells: columns.iter().map(|column| column.render(record)).collect(),
                thin_margin: is_thin_profit(record.profit, thin_profit_threshold),
            })
            .collect();
        Self { columns, rows }
    }

    #[must_use]
    pub fn thin_margin_count(&self) -> usize {
        self.rows.iter().filter(|row| row.thin_margin).count()
    }

    #[must_use]
    pub fn column_titles(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.title).collect()
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize report table: {e}"))
        })
    }
}
