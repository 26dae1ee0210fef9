// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_hit::{HitRaster, KeyRegistry, KeyedShape};

const SIZE: u32 = 512;

fn gen_grid_scene(keys: &mut KeyRegistry<usize>, n: usize) -> Vec<KeyedShape<Rect>> {
    let cell = f64::from(SIZE) / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let Ok(key) = keys.allocate(y * n + x) else {
                continue;
            };
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let rect = Rect::new(x0, y0, x0 + cell - 1.0, y0 + cell - 1.0);
            out.push(KeyedShape::new(key, rect));
        }
    }
    out
}

fn gen_random_circles(
    keys: &mut KeyRegistry<usize>,
    count: usize,
    seed: u64,
) -> Vec<KeyedShape<Circle>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let Ok(key) = keys.allocate(i) else {
            continue;
        };
        let center = random_point(&mut rng);
        out.push(KeyedShape::new(key, Circle::new(center, rng.gen_range(4.0..40.0))));
    }
    out
}

fn random_point(rng: &mut StdRng) -> Point {
    let extent = f64::from(SIZE);
    Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent))
}

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_point(&mut rng)).collect()
}

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_redraw");
    for &n in &[8_usize, 32, 64] {
        let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(1));
        let scene = gen_grid_scene(&mut keys, n);
        group.throughput(Throughput::Elements(scene.len() as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter_batched(
                || HitRaster::new(SIZE, SIZE).ok(),
                |raster| {
                    if let Some(mut raster) = raster {
                        raster.redraw(black_box(&scene));
                        black_box(raster);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_query");
    let points = gen_points(1024, 7);
    group.throughput(Throughput::Elements(points.len() as u64));

    let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(2));
    let scene = gen_random_circles(&mut keys, 2_000, 3);
    let Ok(mut raster) = HitRaster::new(SIZE, SIZE) else {
        return;
    };
    raster.redraw(&scene);

    group.bench_function("query_after_redraw", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for p in &points {
                if raster.query(&keys, black_box(*p)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    // The single-shape probe clears and repaints per call; compare a handful of
    // shapes against the scene-wide query above.
    let probe = &scene[..16.min(scene.len())];
    group.bench_function("point_in_shape_16", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for p in points.iter().take(64) {
                for shape in probe {
                    if raster.point_in_shape(shape, black_box(*p)) {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        });
    });
    group.finish();
}

fn bench_allocate(c: &mut Criterion) {
    c.bench_function("key_allocate_10k", |b| {
        b.iter_batched(
            || KeyRegistry::<usize>::with_rng(StdRng::seed_from_u64(9)),
            |mut keys| {
                for i in 0..10_000 {
                    black_box(keys.allocate(i).ok());
                }
                keys
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_redraw, bench_query, bench_allocate);
criterion_main!(benches);
