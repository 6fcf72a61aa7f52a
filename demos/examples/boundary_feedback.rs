// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary feedback basics.
//!
//! Show how an out-of-bounds drag is reported: violation list with
//! severities, the flag summary, soft-enforcement warnings, and the
//! effective pannable region at two zoom levels.
//!
//! Run:
//! - `cargo run -p viewfinder_demos --example boundary_feedback`

use kurbo::Size;
use viewfinder_bounds::{
    CanvasPosition, Enforcement, ViewportConstraints, constraint_violations,
    validate_boundary_constraints, viewport_bounds, violated_bounds,
};
use viewfinder_demos::fmt_position;

fn main() {
    let constraints = ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0);

    // A drag that overshot the corner while pinch-zooming past the limit.
    let dragged = CanvasPosition::new(1000.0, 800.0, 5.0);
    println!("dragged to: {}", fmt_position(&dragged));
    println!("violated:   {:?}", violated_bounds(&dragged, &constraints));
    for violation in constraint_violations(&dragged, &constraints) {
        println!(
            "  {:<9} severity {:.3}  ({})",
            format!("{}", violation.kind),
            violation.severity,
            violation.suggestion
        );
    }

    // Soft enforcement tolerates a rubber-band overshoot but warns.
    let nudged = CanvasPosition::new(650.0, 0.0, 1.0);
    let soft = validate_boundary_constraints(&nudged, &constraints, Enforcement::soft());
    println!("\nsoft validation of {}:", fmt_position(&nudged));
    println!("  valid: {}, adjusted: {}", soft.is_valid, fmt_position(&soft.adjusted_position));
    for warning in &soft.warnings {
        println!("  warning: {warning}");
    }

    // The pannable region tightens as the user zooms in.
    let viewport = Size::new(1920.0, 1080.0);
    for scale in [1.0, 2.0] {
        let bounds = viewport_bounds(viewport, scale, &constraints);
        println!(
            "\npannable region at {scale}x: [{:.0}, {:.0}] x [{:.0}, {:.0}] ({:.0} x {:.0})",
            bounds.left, bounds.right, bounds.top, bounds.bottom, bounds.width, bounds.height
        );
    }
}
