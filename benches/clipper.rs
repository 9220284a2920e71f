use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viewclip::clipper::{clip_line, clip_polygon};
use viewclip::prelude::*;

fn window() -> Rect {
    Rect::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0))
}

fn inside_line() -> Line {
    Line::new(Point2D::new(10.0, 10.0), Point2D::new(90.0, 90.0))
}

fn straddling_line() -> Line {
    Line::new(Point2D::new(-50.0, 50.0), Point2D::new(150.0, 50.0))
}

fn outside_line() -> Line {
    Line::new(Point2D::new(-50.0, 10.0), Point2D::new(-10.0, 90.0))
}

/// A regular n-gon centered on the window's top-right corner, so roughly
/// half the vertices get clipped away each run.
fn straddling_polygon(n: usize) -> Polygon {
    let vertices = (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            Point2D::new(100.0 + 60.0 * angle.cos(), 100.0 + 60.0 * angle.sin())
        })
        .collect();
    Polygon::new(vertices)
}

fn benchmark_line_clipping(c: &mut Criterion) {
    let w = window();
    let mut group = c.benchmark_group("clip_line");

    group.bench_function("trivial_accept", |b| {
        let line = inside_line();
        b.iter(|| clip_line(black_box(&line), black_box(&w)))
    });
    group.bench_function("trivial_reject", |b| {
        let line = outside_line();
        b.iter(|| clip_line(black_box(&line), black_box(&w)))
    });
    group.bench_function("both_ends_trimmed", |b| {
        let line = straddling_line();
        b.iter(|| clip_line(black_box(&line), black_box(&w)))
    });

    group.finish();
}

fn benchmark_polygon_clipping(c: &mut Criterion) {
    let w = window();
    let mut group = c.benchmark_group("clip_polygon");

    for n in [4, 16, 64, 256] {
        let polygon = straddling_polygon(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &polygon, |b, polygon| {
            b.iter(|| clip_polygon(black_box(polygon), black_box(&w)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_line_clipping, benchmark_polygon_clipping);
criterion_main!(benches);
