// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/tilt, zoom, and dolly-zoom interpolators.
//!
//! Every function here is a pure mapping of `(start, end, progress)` to a
//! frame value. `progress` is expected to be *already eased* — easing
//! belongs upstream in `viewfinder_easing`, so swapping curves changes
//! timing only. Duration never enters these formulas; it matters only to
//! whoever derives `progress` from elapsed time (see
//! [`CameraMove`](crate::CameraMove)).

use viewfinder_bounds::CanvasPosition;

use kurbo::Point;

/// Upper blur bound for the zoom effect, in CSS pixels.
const ZOOM_MAX_BLUR: f64 = 4.0;
/// Lower opacity bound for the zoom effect. Opacity never reaches zero.
const ZOOM_MIN_OPACITY: f64 = 0.75;
/// Fraction by which full dolly-zoom intensity separates the background
/// scale from the foreground scale.
const DOLLY_SEPARATION: f64 = 0.3;
/// Intensity damping once the dolly zoom has already fired this session.
const DOLLY_ENGAGED_DAMPING: f64 = 0.35;

/// Interpolates pan and zoom linearly between two positions.
///
/// Each of x, y, and scale interpolates independently. `progress = 0.0`
/// returns exactly `start`; `progress = 1.0` returns exactly `end`.
/// `progress` is clamped into `[0, 1]` and `NaN` is treated as `0.0`.
#[must_use]
pub fn pan_tilt(start: &CanvasPosition, end: &CanvasPosition, progress: f64) -> CanvasPosition {
    start.lerp(end, unit(progress))
}

/// Visual side effects accompanying a zoom transition.
///
/// Both fields move monotonically with progress and stay bounded:
/// `opacity` within `(0, 1]`, `blur` within `[0, 4]` px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomEffects {
    /// Content opacity; dips while the zoom is in flight, never to zero.
    pub opacity: f64,
    /// Motion blur radius in CSS pixels.
    pub blur: f64,
}

/// One frame of a zoom transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFrame {
    /// Interpolated pan/zoom state.
    pub position: CanvasPosition,
    /// Monotonic, bounded visual effects for this frame.
    pub effects: ZoomEffects,
    /// The anchor supplied by the caller, passed through unchanged for use
    /// as a transform origin.
    pub center_point: Option<Point>,
}

/// Interpolates a zoom transition with derived opacity/blur effects.
///
/// Position interpolation is identical to [`pan_tilt`]. Zooming in
/// (`end.scale >= start.scale`) fades opacity down toward 0.75 and raises
/// blur toward 4 px as progress advances; zooming out runs the blur in the
/// opposite direction. Either way both effects are monotonic in progress
/// for a fixed start/end pair.
#[must_use]
pub fn zoom(
    start: &CanvasPosition,
    end: &CanvasPosition,
    progress: f64,
    center_point: Option<Point>,
) -> ZoomFrame {
    let p = unit(progress);
    let zooming_in = end.scale >= start.scale;
    let effects = if zooming_in {
        ZoomEffects {
            opacity: 1.0 - (1.0 - ZOOM_MIN_OPACITY) * p,
            blur: ZOOM_MAX_BLUR * p,
        }
    } else {
        ZoomEffects {
            opacity: ZOOM_MIN_OPACITY + (1.0 - ZOOM_MIN_OPACITY) * p,
            blur: ZOOM_MAX_BLUR * (1.0 - p),
        }
    };
    ZoomFrame {
        position: start.lerp(end, p),
        effects,
        center_point,
    }
}

/// One frame of a dolly-zoom transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DollyZoomFrame {
    /// Interpolated foreground pan/zoom state.
    pub position: CanvasPosition,
    /// Background layer scale; strictly below `position.scale` whenever
    /// `intensity > 0`, producing the vertigo separation.
    pub background_scale: f64,
    /// Effect strength in `[0, 1]`; peaks at mid-transition and tapers to
    /// zero at both ends.
    pub intensity: f64,
}

/// Interpolates the one-shot dolly-zoom ("vertigo") transition.
///
/// Intensity follows the bump `4·p·(1−p)`: zero at both endpoints, maximal
/// at `progress = 0.5`. The effect is meant to fire once per session; the
/// caller owns the `has_engaged` flag and passes it
/// back in, which damps the intensity on every subsequent run. This
/// function never stores the flag.
#[must_use]
pub fn dolly_zoom(
    start: &CanvasPosition,
    end: &CanvasPosition,
    progress: f64,
    has_engaged: bool,
) -> DollyZoomFrame {
    let p = unit(progress);
    let amplitude = if has_engaged { DOLLY_ENGAGED_DAMPING } else { 1.0 };
    let intensity = 4.0 * p * (1.0 - p) * amplitude;
    let position = start.lerp(end, p);
    DollyZoomFrame {
        position,
        background_scale: position.scale * (1.0 - DOLLY_SEPARATION * intensity),
        intensity,
    }
}

pub(crate) fn unit(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
