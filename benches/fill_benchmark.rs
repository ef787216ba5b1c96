//! Benchmark for mask compositing.

use std::f64::consts::{PI, TAU};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_canvas::canvas::Canvas;

fn zigzag_canvas(scale: i32) -> Canvas {
    let mut ctx = Canvas::new(1024, 1024).unwrap();
    ctx.move_to(0, 0);
    for (x, y) in [(40, 0), (0, 40), (40, 40), (40, 80), (0, 40)] {
        ctx.line_to(x * scale, y * scale).unwrap();
    }
    ctx
}

fn polygon_fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_fill");

    for scale in [1, 4, 12] {
        let mut ctx = zigzag_canvas(scale);
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, _| {
            b.iter(|| black_box(ctx.fill()));
        });
    }

    group.finish();
}

fn arc_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc");

    for radius in [16, 128, 500] {
        let mut ctx = Canvas::new(1024, 1024).unwrap();
        ctx.arc(512, 512, radius, PI, PI / 3.0).unwrap();
        group.bench_with_input(BenchmarkId::new("fill", radius), &radius, |b, _| {
            b.iter(|| black_box(ctx.fill()));
        });

        let mut ctx = Canvas::new(1024, 1024).unwrap();
        ctx.arc(512, 512, radius, 0.0, TAU).unwrap();
        group.bench_with_input(BenchmarkId::new("stroke", radius), &radius, |b, _| {
            b.iter(|| black_box(ctx.stroke()));
        });
    }

    group.finish();
}

fn polyline_stroke_benchmark(c: &mut Criterion) {
    let mut ctx = zigzag_canvas(12);
    c.bench_function("polyline_stroke_x12", |b| {
        b.iter(|| black_box(ctx.stroke()));
    });
}

criterion_group!(
    benches,
    polygon_fill_benchmark,
    arc_benchmark,
    polyline_stroke_benchmark
);
criterion_main!(benches);
