use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numconvert::engine::{format_digits, strip_grouping};
use numconvert::models::Radix;

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_grouping");

    for len in [8usize, 64, 512] {
        let digits = "10110100".chars().cycle().take(len).collect::<String>();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("format", len), &digits, |b, digits| {
            b.iter(|| black_box(format_digits(black_box(digits), Radix::Binary)));
        });

        let formatted = format_digits(&digits, Radix::Binary);
        group.bench_with_input(BenchmarkId::new("strip", len), &formatted, |b, formatted| {
            b.iter(|| black_box(strip_grouping(black_box(formatted))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
