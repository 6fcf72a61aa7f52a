// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Bounds: boundary and constraint evaluation for the spatial canvas.
//!
//! This crate owns the two value types shared across the workspace — a
//! [`CanvasPosition`] (pan + zoom) and the [`ViewportConstraints`] it is
//! evaluated against — and the evaluators the canvas runs every frame:
//! - Inclusive containment checks ([`is_position_within_bounds`]).
//! - Idempotent, `NaN`-safe clamping ([`clamp_to_viewport`]).
//! - Per-bound violation reporting with distance-ordered severities
//!   ([`constraint_violations`], [`violated_bounds`]).
//! - Soft/hard enforcement validation ([`validate_boundary_constraints`]).
//! - Effective pannable-region computation ([`viewport_bounds`]).
//!
//! Every function is total: malformed numeric input (`NaN`, inverted
//! `min > max` ranges, zero-sized viewports) degrades to a safe finite
//! result and is reported through return values, never through panics.
//! The consuming UI must not crash from a transient interaction glitch.
//!
//! ## Minimal example
//!
//! ```rust
//! use viewfinder_bounds::{CanvasPosition, ViewportConstraints, clamp_to_viewport};
//!
//! let constraints = ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0);
//!
//! // A pan that overshot the right edge comes back clamped.
//! let wild = CanvasPosition::new(1000.0, 0.0, 1.0);
//! let safe = clamp_to_viewport(&wild, &constraints);
//! assert_eq!(safe, CanvasPosition::new(600.0, 0.0, 1.0));
//! ```
//!
//! This crate is `no_std` (with `alloc` for suggestion strings).

#![no_std]

extern crate alloc;

mod evaluate;
mod position;
mod violations;

pub use evaluate::{
    BoundaryValidation, EffectiveBounds, Enforcement, clamp_to_viewport,
    is_position_within_bounds, validate_boundary_constraints, viewport_bounds,
};
pub use position::{CanvasPosition, ViewportConstraints};
pub use violations::{
    BoundFlags, BoundKind, BoundaryViolation, ViolationList, constraint_violations,
    violated_bounds,
};
