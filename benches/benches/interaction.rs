// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use star_rating_interaction::{Precision, RowLayout, locate, quantize};

/// Pointer positions sweeping across the row and a little past both ends.
fn sweep(layout: &RowLayout, samples: usize) -> Vec<f64> {
    let span = layout.total_width() + 40.0;
    (0..samples)
        .map(|i| -20.0 + span * (i as f64) / (samples as f64))
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/locate");

    for count in [5_usize, 10, 100] {
        let layout =
            RowLayout::new(24.0, 6.0, count).expect("bench row has positive star width");
        let xs = sweep(&layout, 1_024);
        group.throughput(Throughput::Elements(xs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &xs, |b, xs| {
            b.iter(|| {
                for &x in xs {
                    black_box(locate(black_box(x), 24.0, 6.0, count));
                }
            });
        });
    }

    group.finish();
}

fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/quantize");
    let layout = RowLayout::new(24.0, 6.0, 5).expect("bench row has positive star width");
    let locations: Vec<_> = sweep(&layout, 1_024)
        .into_iter()
        .map(|x| layout.locate(x))
        .collect();
    group.throughput(Throughput::Elements(locations.len() as u64));

    for (name, precision) in [
        ("continuous", Precision::CONTINUOUS),
        ("half", Precision::HALF),
        ("whole", Precision::WHOLE),
    ] {
        group.bench_with_input(BenchmarkId::new(name, 5), &locations, |b, locations| {
            b.iter(|| {
                for &location in locations {
                    black_box(quantize(black_box(location), precision));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate, bench_quantize);
criterion_main!(benches);
