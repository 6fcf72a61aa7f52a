// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Match-cut transition: morphing one element's bounds into another's.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect};
use viewfinder_bounds::CanvasPosition;

use crate::transitions::unit;

/// Floor for source-rect dimensions so size ratios stay finite.
const MIN_RECT_DIMENSION: f64 = 1e-9;

/// One frame of a match-cut transition.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCutFrame {
    /// Canvas position tracking the morphing element's center, with the
    /// frame's scale folded in.
    pub position: CanvasPosition,
    /// Relative size change at this frame; greater than `1.0` when the
    /// element is growing.
    pub scale: f64,
    /// Echo of the input progress.
    pub morph_progress: f64,
    /// CSS transform origin for the morph, `"<x>px <y>px"`.
    pub transform_origin: String,
}

/// Interpolates a match cut between two element bounds.
///
/// The element's center travels linearly from `from.center()` to
/// `to.center()`; the scale interpolates from `1.0` toward the ratio of
/// the two rect sizes (mean of the width and height ratios), so it exceeds
/// `1.0` whenever the target is larger. The transform origin follows the
/// interpolated center.
#[must_use]
pub fn match_cut(from: Rect, to: Rect, progress: f64) -> MatchCutFrame {
    let p = unit(progress);
    let from_w = from.width().abs().max(MIN_RECT_DIMENSION);
    let from_h = from.height().abs().max(MIN_RECT_DIMENSION);
    let ratio_w = to.width().abs() / from_w;
    let ratio_h = to.height().abs() / from_h;
    let target_scale = (ratio_w + ratio_h) * 0.5;
    let target_scale = if target_scale.is_finite() {
        target_scale
    } else {
        1.0
    };
    let scale = 1.0 + (target_scale - 1.0) * p;

    let center = lerp_point(from.center(), to.center(), p);
    MatchCutFrame {
        position: CanvasPosition::new(center.x, center.y, scale),
        scale,
        morph_progress: p,
        transform_origin: format!("{:.1}px {:.1}px", center.x, center.y),
    }
}

fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
