// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use peniko::Color;
use star_rating::Rating;
use star_rating_style::{BorderedStyle, HalfSymbolStyle, PartialFillStyle, StyleStack};

fn stacks() -> Vec<(&'static str, StyleStack)> {
    vec![
        ("default", StyleStack::new()),
        ("half", StyleStack::new().with(HalfSymbolStyle::default())),
        (
            "partial_fill",
            StyleStack::new().with(PartialFillStyle::new(Color::BLACK, Color::WHITE)),
        ),
        (
            "bordered_x3",
            StyleStack::new()
                .with(BorderedStyle::new(Color::BLACK, 1.0))
                .with(BorderedStyle::new(Color::BLACK, 1.0))
                .with(BorderedStyle::new(Color::BLACK, 1.0)),
        ),
    ]
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/row");

    for (name, styles) in stacks() {
        let mut rating = Rating::builder()
            .count(10)
            .styles(styles)
            .value(6.4)
            .build()
            .expect("bench configuration is valid");
        rating.measure(Size::new(24.0, 24.0), 294.0);
        group.bench_with_input(BenchmarkId::from_parameter(name), &rating, |b, rating| {
            b.iter(|| black_box(rating.render()));
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/drag");
    let mut rating = Rating::builder()
        .precision(0.5)
        .build()
        .expect("bench configuration is valid");
    rating.measure(Size::new(24.0, 24.0), 144.0);

    // A full drag across the row, one event per pixel.
    group.bench_with_input(BenchmarkId::from_parameter(144), &rating, |b, rating| {
        b.iter_batched(
            || rating.clone(),
            |mut rating| {
                rating.pointer_down(Point::new(0.0, 12.0));
                for x in 1..=144 {
                    black_box(rating.pointer_drag(Point::new(f64::from(x), 12.0)));
                }
                rating.pointer_up();
                black_box(rating.value())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_drag);
criterion_main!(benches);
