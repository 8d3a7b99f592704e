// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the grid layout engine.
//!
//! Measures the performance of:
//! - Geometry computation (runs on every resize event)
//! - Point hit-testing (runs on every pointer move)

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use iced_dots::domain::grid::{GapRatio, SizeBounds};
use iced_dots::ui::grid::layout;
use std::hint::black_box;

/// Benchmark geometry computation across a sweep of window sizes.
fn bench_compute_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");

    let bounds = SizeBounds::new(20.0, 40.0);
    let gap = GapRatio::new(0.2);

    group.bench_function("compute_geometry", |b| {
        b.iter(|| {
            for width in [320.0_f32, 768.0, 1280.0, 1920.0, 3840.0] {
                let container = Size::new(width, width * 0.5625);
                black_box(layout::compute_geometry(container, bounds, gap));
            }
        });
    });

    group.finish();
}

/// Benchmark hit-testing a diagonal sweep of pointer positions.
fn bench_cell_at_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");

    let container = Size::new(1280.0, 720.0);
    let geometry = layout::compute_geometry(container, SizeBounds::new(20.0, 40.0), GapRatio::new(0.2));

    group.bench_function("cell_at_point", |b| {
        b.iter(|| {
            for step in 0..100 {
                let t = step as f32 / 100.0;
                let point = Point::new(t * container.width, t * container.height);
                black_box(geometry.cell_at_point(point, container));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_geometry, bench_cell_at_point);
criterion_main!(benches);
