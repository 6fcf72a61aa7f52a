// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section navigation basics.
//!
//! Resolve a section's spatial target, then drive an eased camera move
//! toward it tick by tick, clamping every frame before it would be
//! applied to the view transform.
//!
//! Run:
//! - `cargo run -p viewfinder_demos --example navigate_section`

use viewfinder_bounds::{CanvasPosition, ViewportConstraints, clamp_to_viewport};
use viewfinder_camera::{CameraMove, MovementConfig};
use viewfinder_demos::fmt_position;
use viewfinder_grid::{GridConfiguration, Viewport, section_grid_position};

fn main() {
    let config = GridConfiguration::grid(3, 2, 1200.0, 800.0);
    let viewport = Viewport::new(1920.0, 1080.0, 2.0);
    let constraints = ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0);

    // A navigation event: the lens selected the "capture" section.
    let target_coords = section_grid_position("capture", &config);
    let target = CanvasPosition::new(target_coords.offset_x, target_coords.offset_y, 1.5);
    println!(
        "navigating to capture: cell ({}, {}), target {}",
        target_coords.grid_x,
        target_coords.grid_y,
        fmt_position(&target)
    );
    println!("viewport: {}x{} @{}x", viewport.width, viewport.height, viewport.device_pixel_ratio);

    let movement = CameraMove::new(CanvasPosition::IDENTITY, target, MovementConfig::default());

    // Simulate 60 fps ticks until the transition completes.
    let mut tick = 0_u32;
    loop {
        let elapsed = f64::from(tick) * 16.0;
        let frame = movement.position_at(elapsed);
        let applied = clamp_to_viewport(&frame, &constraints);
        if tick % 10 == 0 {
            println!("t={elapsed:>6.0}ms  {}", fmt_position(&applied));
        }
        if movement.is_complete(elapsed) {
            println!("done:       {}", fmt_position(&applied));
            break;
        }
        tick += 1;
    }
}
