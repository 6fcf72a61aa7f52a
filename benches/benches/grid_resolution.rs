// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for per-navigation-event grid resolution.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use viewfinder_grid::{
    GridConfiguration, Section, Viewport, section_grid_position, spatial_grid, validate_layout,
};

fn bench_grid(c: &mut Criterion) {
    let config = GridConfiguration::grid(3, 2, 900.0, 600.0);
    let circular = GridConfiguration::circular(3, 2, 900.0, 600.0);
    let viewport = Viewport::new(1920.0, 1080.0, 2.0);
    let names: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();

    c.bench_function("grid/spatial_grid", |b| {
        b.iter(|| black_box(spatial_grid(black_box(&config), &viewport)));
    });

    c.bench_function("grid/place_all_sections", |b| {
        b.iter(|| {
            for name in &names {
                black_box(section_grid_position(name, &config));
            }
        });
    });

    c.bench_function("grid/place_all_sections_circular", |b| {
        b.iter(|| {
            for name in &names {
                black_box(section_grid_position(name, &circular));
            }
        });
    });

    c.bench_function("grid/validate_layout", |b| {
        b.iter(|| black_box(validate_layout(&config, black_box(&names))));
    });
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
