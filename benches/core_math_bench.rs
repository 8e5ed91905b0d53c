use criterion::{Criterion, criterion_group, criterion_main};
use ops_dashboard::api::build_chart_option;
use ops_dashboard::core::{CategoryAxis, ChartKind, SeriesDescriptor};
use ops_dashboard::metrics::map_records;
use ops_dashboard::sample::generate_orders;
use std::hint::black_box;

fn bench_map_records_10k(c: &mut Criterion) {
    let orders = generate_orders(10_000, Some(1));

    c.bench_function("map_records_10k", |b| {
        b.iter(|| {
            let _ = map_records(black_box(&orders));
        })
    });
}

fn bench_build_chart_option(c: &mut Criterion) {
    let categories: CategoryAxis = (0..1_000).map(|i| format!("t{i}")).collect();
    let series: Vec<SeriesDescriptor> = (0..8)
        .map(|s| {
            let values: Vec<f64> = (0..1_000).map(|i| f64::from(i * s)).collect();
            SeriesDescriptor::from_values(format!("series-{s}"), &values)
        })
        .collect();

    c.bench_function("build_chart_option_8x1000", |b| {
        b.iter(|| {
            let _ = build_chart_option(
                black_box(&series),
                black_box(&categories),
                ChartKind::Line,
                "bench",
            );
        })
    });
}

criterion_group!(benches, bench_map_records_10k, bench_build_chart_option);
criterion_main!(benches);
