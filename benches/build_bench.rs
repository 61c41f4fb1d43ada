//! Criterion benchmarks for the update pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use hourmap::types::{CategoryColumn, DataTable, Identity, MeasureColumn};
use hourmap::visual::{Hourmap, UpdateInput, Viewport};

/// Full week of data: 7 days x 24 hours.
fn full_week() -> DataTable {
    let days_of_week = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let mut days = Vec::new();
    let mut hours = Vec::new();
    let mut identities = Vec::new();
    let mut values = Vec::new();
    for (d, day) in days_of_week.iter().enumerate() {
        for hour in 0..24u32 {
            let row = d * 24 + hour as usize;
            days.push(day.to_string());
            hours.push(hour.to_string());
            identities.push(Identity::new(format!("r{row}")));
            values.push(Some((row % 37) as f64));
        }
    }
    DataTable::new(
        vec![
            CategoryColumn::new("Day", days, identities),
            CategoryColumn::new("Hour", hours, Vec::new()),
        ],
        vec![MeasureColumn::new(
            "events",
            vec!["values".into()],
            values,
        )],
    )
}

fn bench_update(c: &mut Criterion) {
    let table = full_week();
    let rows = table.categories[0].values.len() as u64;

    let mut group = c.benchmark_group("update");
    group.throughput(Throughput::Elements(rows));
    group.bench_with_input(
        BenchmarkId::new("full_week", rows),
        &table,
        |b, table| {
            let mut visual = Hourmap::with_defaults();
            let input = UpdateInput {
                table,
                viewport: Viewport::new(1280.0, 720.0),
                formatting: None,
            };
            b.iter(|| black_box(visual.update(&input).unwrap()));
        },
    );
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
