use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use planar_shapes::{
    core::math::Point,
    shapes::{Geometry, Polyline},
};
use test_polylines::*;

fn bench_polyline_contains(b: &mut Bencher, polyline: &Polyline<f64>) {
    // point not on the polyline so every segment is visited
    let probe = Point::new(1.0e6, 1.0e6);
    b.iter(|| polyline.contains_point(probe))
}

fn bench_polyline_bounds(b: &mut Bencher, polyline: &Polyline<f64>) {
    b.iter(|| polyline.bounds())
}

fn polyline_queries_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline_queries");
    let point_counts = &[25, 250, 2500, 25000];
    for &i in point_counts {
        let polyline = spiral(i);
        group.bench_with_input(BenchmarkId::new("contains_miss", i), &polyline, |b, p| {
            bench_polyline_contains(b, p)
        });
        group.bench_with_input(BenchmarkId::new("bounds", i), &polyline, |b, p| {
            bench_polyline_bounds(b, p)
        });
    }

    group.finish();
}

criterion_group!(polyline_queries, polyline_queries_group,);
criterion_main!(polyline_queries);
