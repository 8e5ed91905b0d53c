//! Generated sample data standing in for a real backend.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{CategoryAxis, MarkLine, MarkLineItem, SeriesDescriptor};
use crate::metrics::OrderRecord;

pub const REGIONS: [&str; 3] = ["Manhattan", "Guomao", "Business Center"];

pub const DEFAULT_SAMPLE_ORDER_COUNT: usize = 46;

/// Series and labels delivered once the simulated load completes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleChartData {
    pub series: Vec<SeriesDescriptor>,
    pub categories: CategoryAxis,
}

#[must_use]
pub fn chart_dataset() -> SampleChartData {
    let average = || MarkLine::new(vec![MarkLineItem::average()]);
    let series = vec![
        SeriesDescriptor::new(
            REGIONS[0],
            vec![
                Some(-190.0),
                Some(100.0),
                Some(100.0),
                None,
                Some(130.0),
                Some(140.0),
                Some(150.0),
            ],
        ),
        SeriesDescriptor::from_values(
            REGIONS[1],
            &[210.0, 120.0, 330.0, 100.0, 470.0, 690.0, -200.0],
        ),
        SeriesDescriptor::from_values(
            REGIONS[2],
            &[1500.0, 120.0, 830.0, -800.0, 170.0, 190.0, -1500.0],
        ),
    ]
    .into_iter()
    .map(|descriptor| descriptor.with_smooth(true).with_mark_line(average()))
    .collect();

    SampleChartData {
        series,
        categories: std::iter::repeat_n("2023-02-01", 7).collect(),
    }
}

/// Generates `count` orders; a seed makes the output reproducible.
#[must_use]
pub fn generate_orders(count: usize, seed: Option<u64>) -> Vec<OrderRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_orders_with(&mut rng, count)
}

/// Cost in [100, 500), price at 1.2-1.8x cost, both fee rates in [1, 3) percent.
pub fn generate_orders_with<R: Rng>(rng: &mut R, count: usize) -> Vec<OrderRecord> {
    (0..count)
        .map(|i| {
            let cost = 100.0 + rng.gen_range(0.0..400.0);
            let price = cost * (1.2 + rng.gen_range(0.0..0.6));
            let order_fee_rate_pct = 100.0 * (0.01 + rng.gen_range(0.0..0.02));
            let regional_policy_fee_rate_pct = 100.0 * (0.01 + rng.gen_range(0.0..0.02));
            OrderRecord::new(
                sample_date(i),
                REGIONS[i % REGIONS.len()],
                cost,
                price,
                order_fee_rate_pct,
                regional_policy_fee_rate_pct,
            )
            .with_key(i)
        })
        .collect()
}

/// Cycles through 2023-02-01 ..= 2023-02-09.
fn sample_date(index: usize) -> String {
    let day = (index % 9) as u32 + 1;
    NaiveDate::from_ymd_opt(2023, 2, day)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
