use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numconvert::engine::{convert, render};
use numconvert::models::Radix;

/// Pre-render inputs so the benchmark measures conversion alone
fn inputs(count: u64, radix: Radix) -> Vec<String> {
    (0..count).map(|v| render(v.wrapping_mul(2_654_435_761), radix)).collect()
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [100u64, 1_000, 10_000] {
        let hex_inputs = inputs(size, Radix::Hexadecimal);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("hex_to_bin", size), &hex_inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(
                        convert(black_box(input), Radix::Hexadecimal, Radix::Binary).unwrap(),
                    );
                }
            });
        });

        let dec_inputs = inputs(size, Radix::Decimal);
        group.bench_with_input(BenchmarkId::new("dec_to_hex", size), &dec_inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(
                        convert(black_box(input), Radix::Decimal, Radix::Hexadecimal).unwrap(),
                    );
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
