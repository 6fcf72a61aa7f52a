// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Viewfinder demos.
//!
//! Run the demos with `cargo run -p viewfinder_demos --example <name>`.

use viewfinder_bounds::CanvasPosition;

/// Formats a canvas position for terminal output.
#[must_use]
pub fn fmt_position(position: &CanvasPosition) -> String {
    format!(
        "x={:>8.1} y={:>8.1} scale={:>5.2}",
        position.x, position.y, position.scale
    )
}
