// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rack-focus effect: subtle blur/opacity shifts for hover/focus/blur states.
//!
//! Named after the photography technique of pulling focus between subjects.
//! The effect is deliberately understated: blur is capped at a few pixels
//! and the duration sits at 300 ms regardless of state.

use viewfinder_bounds::CanvasPosition;

use crate::transitions::unit;

/// Hard cap on rack-focus blur, in CSS pixels.
const MAX_RACK_BLUR: f64 = 3.0;
/// Rack-focus transitions always run close to this duration.
const RACK_FOCUS_DURATION_MS: f64 = 300.0;

/// Which focus plane an element sits on.
///
/// For any fixed progress, blur orders strictly:
/// `Hover < Focus < Blur`, and a focused element is always more opaque
/// than a blurred one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusDepth {
    /// Pointer is over the element; it stays nearly sharp.
    Hover,
    /// Element holds keyboard/interaction focus.
    Focus,
    /// Element is out of focus, receding behind the focused subject.
    Blur,
}

struct DepthProfile {
    blur_base: f64,
    blur_target: f64,
    opacity_base: f64,
    opacity_target: f64,
    scale_factor: f64,
}

impl FocusDepth {
    fn profile(self) -> DepthProfile {
        match self {
            Self::Hover => DepthProfile {
                blur_base: 0.0,
                blur_target: 0.5,
                opacity_base: 1.0,
                opacity_target: 1.0,
                scale_factor: 1.02,
            },
            Self::Focus => DepthProfile {
                blur_base: 0.25,
                blur_target: 1.5,
                opacity_base: 1.0,
                opacity_target: 1.0,
                scale_factor: 1.0,
            },
            Self::Blur => DepthProfile {
                blur_base: 0.5,
                blur_target: 3.0,
                opacity_base: 0.95,
                opacity_target: 0.7,
                scale_factor: 0.98,
            },
        }
    }
}

/// One frame of a rack-focus effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackFocusFrame {
    /// Blur radius in CSS pixels; non-decreasing in progress, capped at 3.
    pub blur: f64,
    /// Content opacity in `(0, 1]`.
    pub opacity: f64,
    /// Element scale derived from the canvas scale and the depth profile.
    pub scale: f64,
    /// Suggested transition duration; effectively constant at 300 ms.
    pub duration_ms: f64,
}

/// Computes the rack-focus frame for an element at the given depth.
///
/// `progress` drives the effect from its resting values (`0.0`) to the
/// depth's full values (`1.0`); blur never decreases as progress grows.
#[must_use]
pub fn rack_focus(position: &CanvasPosition, depth: FocusDepth, progress: f64) -> RackFocusFrame {
    let p = unit(progress);
    let profile = depth.profile();
    let blur = (profile.blur_base + (profile.blur_target - profile.blur_base) * p).min(MAX_RACK_BLUR);
    let opacity = profile.opacity_base + (profile.opacity_target - profile.opacity_base) * p;
    let scale_factor = 1.0 + (profile.scale_factor - 1.0) * p;
    RackFocusFrame {
        blur,
        opacity,
        scale: position.scale * scale_factor,
        duration_ms: RACK_FOCUS_DURATION_MS,
    }
}
