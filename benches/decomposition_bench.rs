// Benchmark for remaining-time decomposition
// Measures the per-tick cost of turning a second count into display fields

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launch_countdown::models::time_left::TimeLeft;

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_total_seconds");

    for total in [59u64, 3_661, 86_399, 777_341, 9_999_999_999].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(total), total, |b, &total| {
            b.iter(|| TimeLeft::from_total_seconds(black_box(total)));
        });
    }

    group.finish();
}

fn bench_recombine(c: &mut Criterion) {
    let time_left = TimeLeft::new(8, 23, 55, 41);
    c.bench_function("recombine_total_seconds", |b| {
        b.iter(|| black_box(time_left).total_seconds());
    });
}

criterion_group!(benches, bench_decompose, bench_recombine);
criterion_main!(benches);
