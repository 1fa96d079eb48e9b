// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use marquee_scene::{DetectedObject, DetectionSet};
use marquee_selection::Selection;

/// Builds a grid of 40x40 boxes, 50 image-pixels apart, 100 per row.
fn grid_scene(count: usize) -> DetectionSet {
    let objects = (0..count)
        .map(|i| {
            let x = ((i % 100) * 50) as f64;
            let y = ((i / 100) * 50) as f64;
            DetectedObject::new(Rect::new(x, y, x + 40.0, y + 40.0), "box", 0.5)
        })
        .collect();
    DetectionSet::new(objects)
}

fn bench_hover_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/hover_stack");

    // The hover scan is linear over the set; it runs on every pointer move,
    // so per-event cost at realistic set sizes is what matters.
    for count in [64usize, 512, 4_096] {
        let scene = grid_scene(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("hit", count), &scene, |b, scene| {
            b.iter(|| black_box(scene.hover_stack(black_box(Point::new(20.0, 20.0)))));
        });

        group.bench_with_input(BenchmarkId::new("miss", count), &scene, |b, scene| {
            b.iter(|| black_box(scene.hover_stack(black_box(Point::new(45.0, 45.0)))));
        });
    }

    group.finish();
}

fn bench_marquee_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/marquee_hits");

    for count in [64usize, 512, 4_096] {
        let scene = grid_scene(count);
        group.throughput(Throughput::Elements(count as u64));

        // A sweep over roughly a quarter of the grid.
        let sweep = Rect::new(0.0, 0.0, 2_500.0, 1_000.0);
        group.bench_with_input(BenchmarkId::new("sweep", count), &scene, |b, scene| {
            b.iter(|| black_box(scene.marquee_hits(black_box(sweep))));
        });
    }

    group.finish();
}

fn bench_selection_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/commit");

    for count in [64usize, 512, 4_096] {
        let scene = grid_scene(count);
        let hits = scene.marquee_hits(Rect::new(0.0, 0.0, 5_000.0, 5_000.0));
        group.throughput(Throughput::Elements(hits.len() as u64));

        group.bench_with_input(BenchmarkId::new("replace_with", count), &hits, |b, hits| {
            b.iter_batched(
                Selection::new,
                |mut sel| {
                    sel.replace_with(hits.iter().copied());
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("extend_with", count), &hits, |b, hits| {
            b.iter_batched(
                Selection::new,
                |mut sel| {
                    sel.extend_with(hits.iter().copied());
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hover_stack,
    bench_marquee_hits,
    bench_selection_commit
);
criterion_main!(benches);
