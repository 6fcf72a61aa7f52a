// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Easing: pure easing-curve evaluation.
//!
//! This crate maps a linear time progress in `[0, 1]` onto an eased progress
//! in `[0, 1]` using CSS-style cubic-bezier timing functions. It is the
//! upstream half of the `interpolate(ease(t), start, end)` composition used
//! by the camera transition crates: easing happens here, interpolation
//! happens downstream, and the two never mix. Substituting one curve for
//! another therefore changes timing only, never the mapping logic.
//!
//! ## Minimal example
//!
//! ```rust
//! use viewfinder_easing::{Easing, apply};
//!
//! // Halfway through a material-standard transition, the eased progress is
//! // already past the halfway point (the curve front-loads its motion).
//! let eased = apply(0.5, Easing::Material);
//! assert!(eased > 0.5);
//!
//! // Every curve pins its endpoints.
//! assert_eq!(apply(0.0, Easing::Material), 0.0);
//! assert_eq!(apply(1.0, Easing::Material), 1.0);
//! ```
//!
//! All functions are total: non-finite input degrades to a clamped finite
//! value rather than propagating `NaN`.
//!
//! This crate is `no_std`.

#![no_std]

/// Named easing curves supported by the canvas.
///
/// Except for [`Easing::Linear`], each kind names a fixed cubic-bezier
/// timing function matching its CSS counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Identity mapping; eased progress equals linear progress.
    Linear,
    /// CSS `ease-in`: cubic-bezier(0.42, 0.0, 1.0, 1.0).
    EaseIn,
    /// CSS `ease-out`: cubic-bezier(0.0, 0.0, 0.58, 1.0).
    EaseOut,
    /// CSS `ease-in-out`: cubic-bezier(0.42, 0.0, 0.58, 1.0).
    EaseInOut,
    /// Material-design standard curve: cubic-bezier(0.4, 0.0, 0.2, 1.0).
    ///
    /// Slower than linear near `0` and faster than linear near `1`.
    #[default]
    Material,
}

impl Easing {
    /// Returns the interior control points `[x1, y1, x2, y2]` of the curve,
    /// or `None` for [`Easing::Linear`].
    #[must_use]
    pub fn control_points(self) -> Option<[f64; 4]> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Self::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Self::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Self::Material => Some([0.4, 0.0, 0.2, 1.0]),
        }
    }
}

/// Applies an easing curve to a linear progress value.
///
/// `progress` is clamped into `[0, 1]` first; `NaN` is treated as `0.0`.
/// For every kind, `apply(0.0, kind) == 0.0` and `apply(1.0, kind) == 1.0`.
#[must_use]
pub fn apply(progress: f64, easing: Easing) -> f64 {
    let p = sanitize_unit(progress);
    match easing.control_points() {
        None => p,
        Some(cp) => cubic_bezier_value(p, cp),
    }
}

/// Evaluates a CSS-style cubic-bezier timing function at `t`.
///
/// `control` holds the two interior control points as `[x1, y1, x2, y2]`;
/// the curve is anchored at `(0, 0)` and `(1, 1)`. The x-polynomial is
/// solved for the curve parameter (Newton iteration with a bisection
/// fallback), then the y-polynomial is evaluated at that parameter.
///
/// For `t` strictly inside `(0, 1)` and control points within the unit
/// square, the result is strictly inside `(0, 1)`. Endpoints map exactly:
/// `t = 0.0` yields `0.0` and `t = 1.0` yields `1.0`.
#[must_use]
pub fn cubic_bezier_value(t: f64, control: [f64; 4]) -> f64 {
    let t = sanitize_unit(t);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    // CSS requires the control x coordinates in [0, 1] so that x(u) is
    // monotonic and the parameter solve is well defined.
    let x1 = sanitize_unit(control[0]);
    let y1 = sanitize_unit(control[1]);
    let x2 = sanitize_unit(control[2]);
    let y2 = sanitize_unit(control[3]);

    let u = solve_curve_x(t, x1, x2);
    sample(u, y1, y2)
}

/// Evaluates the single-axis Bernstein polynomial at parameter `u` for
/// anchors 0 and 1 and interior coordinates `c1`, `c2`.
fn sample(u: f64, c1: f64, c2: f64) -> f64 {
    // Horner form of 3(1-u)^2 u c1 + 3(1-u) u^2 c2 + u^3.
    let a = 1.0 + 3.0 * c1 - 3.0 * c2;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * u + b) * u + c) * u
}

fn sample_derivative(u: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 + 3.0 * c1 - 3.0 * c2;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    (3.0 * a * u + 2.0 * b) * u + c
}

/// Finds the curve parameter `u` with `x(u) == x`.
fn solve_curve_x(x: f64, x1: f64, x2: f64) -> f64 {
    // Newton iteration converges in a handful of steps for well-behaved
    // curves; start from the linear guess.
    let mut u = x;
    for _ in 0..8 {
        let err = sample(u, x1, x2) - x;
        if err.abs() < 1e-7 {
            return u;
        }
        let d = sample_derivative(u, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat-derivative regions. x(u) is monotonic on
    // [0, 1] for control x coordinates in [0, 1].
    let mut lo = 0.0;
    let mut hi = 1.0;
    u = x;
    for _ in 0..32 {
        let err = sample(u, x1, x2) - x;
        if err.abs() < 1e-7 {
            break;
        }
        if err > 0.0 {
            hi = u;
        } else {
            lo = u;
        }
        u = (lo + hi) * 0.5;
    }
    u
}

fn sanitize_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
