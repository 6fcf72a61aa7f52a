// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive scaling across viewport breakpoints.

use crate::layout::Viewport;

/// WCAG minimum touch-target edge in CSS pixels. Never relaxed.
const MIN_TOUCH_TARGET: f64 = 44.0;
/// Legibility floor for computed font sizes.
const MIN_FONT_SIZE: f64 = 14.0;
/// Base spacing unit in CSS pixels.
const BASE_SPACING: f64 = 8.0;

/// Standard width breakpoints, smallest first.
const BREAKPOINTS: [(f64, f64, f64); 3] = [
    // (min viewport width, scale factor, base font size)
    (0.0, 1.0, 14.0),
    (600.0, 1.1, 16.0),
    (1024.0, 1.25, 18.0),
];

/// Scaling values resolved for one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveScaling {
    /// The caller's base scale multiplied by the breakpoint factor.
    pub scale: f64,
    /// Font size in CSS pixels; at least 14, non-decreasing in viewport
    /// width and device pixel ratio.
    pub font_size: f64,
    /// Spacing unit in CSS pixels.
    pub spacing: f64,
    /// Minimum touch-target edge; constant 44 regardless of viewport.
    pub min_touch_target: f64,
}

/// Resolves responsive scaling for a viewport.
///
/// A non-finite or non-positive `base_scale` is treated as `1.0`; the
/// device pixel ratio nudges the font size upward (sharper displays can
/// carry slightly larger type) and never downward.
#[must_use]
pub fn responsive_scaling(base_scale: f64, viewport: &Viewport) -> ResponsiveScaling {
    let base_scale = if base_scale.is_finite() && base_scale > 0.0 {
        base_scale
    } else {
        1.0
    };
    let width = if viewport.width.is_finite() {
        viewport.width.abs()
    } else {
        0.0
    };
    let dpr = if viewport.device_pixel_ratio.is_finite() {
        viewport.device_pixel_ratio.clamp(1.0, 3.0)
    } else {
        1.0
    };

    let (_, factor, base_font) = BREAKPOINTS
        .iter()
        .rev()
        .find(|(min_width, _, _)| width >= *min_width)
        .copied()
        .unwrap_or(BREAKPOINTS[0]);

    ResponsiveScaling {
        scale: base_scale * factor,
        font_size: (base_font + (dpr - 1.0)).max(MIN_FONT_SIZE),
        spacing: BASE_SPACING * factor,
        min_touch_target: MIN_TOUCH_TARGET,
    }
}
