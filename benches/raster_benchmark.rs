#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the line, circle and triangle rasterizers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterkit::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let mut buf = PixelBuffer::new(1024, 1024, Rgb::WHITE).unwrap();

    for len in [16, 256, 1023] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| draw_line(&mut buf, 0, 0, black_box(len), black_box(len / 3), Rgb::RED));
        });
    }

    group.bench_function("clipped_offscreen", |b| {
        b.iter(|| draw_line(&mut buf, -5000, -200, black_box(5000), 1200, Rgb::RED));
    });

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_circle");
    let mut buf = PixelBuffer::new(1024, 1024, Rgb::WHITE).unwrap();

    for radius in [4, 64, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| draw_circle(&mut buf, 512, 512, black_box(radius), Rgb::BLUE).unwrap());
        });
    }

    group.finish();
}

fn triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");
    let mut buf = PixelBuffer::new(1024, 1024, Rgb::WHITE).unwrap();

    for scale in [1, 4, 6] {
        let p0 = Point::new(30 * scale, 50 * scale);
        let p1 = Point::new(100 * scale, 150 * scale);
        let p2 = Point::new(160 * scale, 60 * scale);

        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, _| {
            b.iter(|| fill_triangle(&mut buf, black_box(p0), p1, p2, Rgb::GREEN));
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, circle_benchmark, triangle_benchmark);
criterion_main!(benches);
