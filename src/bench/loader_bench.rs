use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mvplot::series::BenchmarkSeries;
use mvplot::table::parse_table;

/// Driver-style output: one `dimension mflops` record per line.
fn driver_output(rows: usize) -> String {
    (1..=rows)
        .map(|i| format!("{} {:.3}\n", i * 16, 1000.0 + (i as f64).sqrt() * 37.5))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_table");
    for rows in [64, 1024, 16384] {
        let text = driver_output(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| parse_table(black_box(text)))
        });
    }
    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let table = parse_table(&driver_output(16384)).unwrap();
    c.bench_function("series_from_table_16384", |b| {
        b.iter(|| BenchmarkSeries::from_table("row", black_box(&table)))
    });
}

criterion_group!(benches, bench_parse, bench_series);
criterion_main!(benches);
