//! Compares squared-space distance checks against root-based checks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iteria::SqrDist;
use macroquad::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_points(count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect()
}

fn bench_threshold(c: &mut Criterion) {
    let points = sample_points(1024);
    let origin = Vec3::ZERO;

    c.bench_function("threshold_sqr_dist", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| SqrDist::between(origin, **p) < black_box(50.0_f32))
                .count()
        })
    });

    c.bench_function("threshold_length", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| origin.distance(**p) < black_box(50.0_f32))
                .count()
        })
    });
}

fn bench_nearest(c: &mut Criterion) {
    let points = sample_points(1024);
    let origin = Vec3::new(3.0, -7.0, 12.0);

    c.bench_function("nearest_sqr_dist", |b| {
        b.iter(|| SqrDist::nearest(black_box(origin), &points))
    });
}

criterion_group!(benches, bench_threshold, bench_nearest);
criterion_main!(benches);
