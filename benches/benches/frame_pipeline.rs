// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-frame hot path: ease, interpolate, clamp.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use viewfinder_bounds::{CanvasPosition, ViewportConstraints, clamp_to_viewport};
use viewfinder_camera::{CameraMove, MovementConfig, dolly_zoom, pan_tilt, zoom};
use viewfinder_easing::{Easing, apply};

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing/apply");
    for kind in [Easing::Linear, Easing::EaseInOut, Easing::Material] {
        group.bench_with_input(BenchmarkId::new("kind", format!("{kind:?}")), &kind, |b, &kind| {
            b.iter(|| {
                // Sweep the full progress range the way a 60 fps tick would.
                for i in 0..=60 {
                    black_box(apply(f64::from(i) / 60.0, kind));
                }
            });
        });
    }
    group.finish();
}

fn bench_frame_tick(c: &mut Criterion) {
    let constraints = ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0);
    let start = CanvasPosition::IDENTITY;
    let end = CanvasPosition::new(900.0, 350.0, 2.0);
    let movement = CameraMove::new(start, end, MovementConfig::default());

    c.bench_function("camera/tick_ease_interpolate_clamp", |b| {
        b.iter(|| {
            let frame = movement.position_at(black_box(320.0));
            black_box(clamp_to_viewport(&frame, &constraints));
        });
    });

    c.bench_function("camera/pan_tilt_raw", |b| {
        b.iter(|| black_box(pan_tilt(&start, &end, black_box(0.37))));
    });

    c.bench_function("camera/zoom_with_effects", |b| {
        b.iter(|| black_box(zoom(&start, &end, black_box(0.37), None)));
    });

    c.bench_function("camera/dolly_zoom", |b| {
        b.iter(|| black_box(dolly_zoom(&start, &end, black_box(0.37), false)));
    });
}

fn bench_violation_reporting(c: &mut Criterion) {
    let constraints = ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0);
    let out_of_bounds = CanvasPosition::new(1000.0, 800.0, 5.0);
    c.bench_function("bounds/constraint_violations_x3", |b| {
        b.iter(|| {
            black_box(viewfinder_bounds::constraint_violations(
                black_box(&out_of_bounds),
                &constraints,
            ))
        });
    });
}

criterion_group!(benches, bench_easing, bench_frame_tick, bench_violation_reporting);
criterion_main!(benches);
