// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use schematic_index::{Bounds, PageDots, QuadTree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, w: f64, h: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * w, rng.next_f64() * h))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = spread + rng.next_f64() * (2000.0 - 2.0 * spread);
        let cy = spread + rng.next_f64() * (2000.0 - 2.0 * spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn bench_quadtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");
    let bounds = Bounds::new(0.0, 0.0, 2000.0, 2000.0);
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_random_points(n, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_random_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(bounds),
                |mut tree| {
                    for p in &points {
                        let _ = tree.insert(*p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });

        let mut tree = QuadTree::new(bounds);
        for p in &points {
            let _ = tree.insert(*p);
        }
        group.bench_function(format!("query_range_n{}", n), |b| {
            b.iter(|| {
                let hits = tree.query_range(Bounds::new(500.0, 500.0, 200.0, 200.0));
                black_box(hits.len());
            })
        });
        group.bench_function(format!("find_containing_node_n{}", n), |b| {
            b.iter(|| black_box(tree.find_containing_node(Point::new(1234.5, 678.9))))
        });
    }

    let points = gen_clustered_points(16, 2_000, 60.0);
    group.bench_function("insert_clustered", |b| {
        b.iter_batched(
            || QuadTree::new(bounds),
            |mut tree| {
                for p in &points {
                    let _ = tree.insert(*p);
                }
                black_box(tree.depth());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_page_dots(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_dots");
    group.bench_function("rebuild_on_zoom_a4", |b| {
        b.iter_batched(
            || PageDots::new(1123.0, 794.0, 30.0),
            |mut dots| {
                let _ = dots.calculate_dots(4.0);
                black_box(dots.rebuild_count());
            },
            BatchSize::SmallInput,
        )
    });

    let mut dots = PageDots::new(1123.0, 794.0, 30.0);
    group.bench_function("same_level_is_cached", |b| {
        b.iter(|| black_box(dots.calculate_dots(black_box(1.2))))
    });

    let mut dots = PageDots::new(1123.0, 794.0, 30.0);
    let _ = dots.calculate_dots(4.0);
    let probes = gen_random_points(256, 1123.0, 794.0);
    group.bench_function("find_closest_dot_zoomed", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(dots.find_closest_dot(*p));
            }
        })
    });
    group.bench_function("all_dots_zoomed", |b| {
        b.iter(|| black_box(dots.all_dots().len()))
    });
    group.finish();
}

criterion_group!(benches, bench_quadtree, bench_page_dots);
criterion_main!(benches);
