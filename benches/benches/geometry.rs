// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use peniko::Color;
use star_rating_shape::{inner_star, outer_star, render_partial_fill};

fn bench_outlines(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/outline");

    for side in [16.0_f64, 64.0, 512.0] {
        let rect = Rect::new(0.0, 0.0, side, side);
        group.bench_with_input(BenchmarkId::new("outer_star", side), &rect, |b, rect| {
            b.iter(|| black_box(outer_star(black_box(*rect))));
        });
        group.bench_with_input(BenchmarkId::new("inner_star", side), &rect, |b, rect| {
            b.iter(|| black_box(inner_star(black_box(*rect))));
        });
    }

    group.finish();
}

fn bench_partial_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/partial_fill");
    let rect = Rect::new(0.0, 0.0, 48.0, 48.0);

    // The clip is the only fraction-dependent part, so these should be flat.
    for fraction in [0.0_f64, 0.37, 1.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fraction),
            &fraction,
            |b, &fraction| {
                b.iter(|| {
                    black_box(render_partial_fill(
                        rect,
                        black_box(fraction),
                        Color::BLACK,
                        Color::WHITE,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_outlines, bench_partial_fill);
criterion_main!(benches);
