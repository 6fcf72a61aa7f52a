// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame driver: derives eased progress from elapsed wall time.
//!
//! This is the only place in the crate where duration is consulted. The
//! interpolators themselves map progress to values and nothing else, which
//! is what keeps two calls with equal progress but different durations
//! identical.

use viewfinder_bounds::CanvasPosition;
use viewfinder_easing::{Easing, apply};

use crate::transitions::pan_tilt;

/// Linear-progress step size used when frame skipping is enabled.
const SKIP_FRAMES_STEP: f64 = 1.0 / 30.0;

/// How a transition between two positions should run.
///
/// Supplied by the caller per transition and never mutated by this crate.
/// `use_gpu` and `skip_frames` are hints for the host compositor; the math
/// honors `skip_frames` by quantizing linear progress and passes `use_gpu`
/// through untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementConfig {
    /// Total transition duration in milliseconds.
    pub duration_ms: f64,
    /// Curve applied to linear progress before interpolation.
    pub easing: Easing,
    /// Hint: composite this transition on the GPU (e.g. `translate3d`).
    pub use_gpu: bool,
    /// Hint: quantize progress to ~30 Hz for low-power hosts.
    pub skip_frames: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            easing: Easing::Material,
            use_gpu: true,
            skip_frames: false,
        }
    }
}

/// A camera transition in flight between two canvas positions.
///
/// `CameraMove` owns no clock: the caller feeds it elapsed milliseconds
/// each animation tick and applies the returned position (typically after
/// clamping it through `viewfinder_bounds`). Dropping the value cancels
/// the transition; there is nothing else to cancel.
#[derive(Clone, Copy, Debug)]
pub struct CameraMove {
    start: CanvasPosition,
    end: CanvasPosition,
    config: MovementConfig,
}

impl CameraMove {
    /// Creates a transition from `start` to `end` under `config`.
    #[must_use]
    pub fn new(start: CanvasPosition, end: CanvasPosition, config: MovementConfig) -> Self {
        Self { start, end, config }
    }

    /// The configuration this transition runs under.
    #[must_use]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Eased progress for the given elapsed time.
    ///
    /// A non-positive or non-finite duration makes the transition instant:
    /// any non-negative elapsed time maps to progress `1.0`.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let duration = self.config.duration_ms;
        let mut linear = if duration.is_finite() && duration > 0.0 {
            (elapsed / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if self.config.skip_frames && linear < 1.0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "linear is in [0, 1), so the step count fits comfortably in u32"
            )]
            let steps = (linear / SKIP_FRAMES_STEP) as u32;
            linear = f64::from(steps) * SKIP_FRAMES_STEP;
        }
        apply(linear, self.config.easing)
    }

    /// Interpolated position for the given elapsed time.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> CanvasPosition {
        pan_tilt(&self.start, &self.end, self.progress_at(elapsed_ms))
    }

    /// Returns `true` once the elapsed time covers the full duration.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress_at(elapsed_ms) >= 1.0
    }

    /// Snapshot of the transition state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraMoveDebugInfo {
        CameraMoveDebugInfo {
            start: self.start,
            end: self.end,
            config: self.config,
        }
    }
}

/// Debug snapshot of a [`CameraMove`].
#[derive(Clone, Copy, Debug)]
pub struct CameraMoveDebugInfo {
    /// Transition start position.
    pub start: CanvasPosition,
    /// Transition end position.
    pub end: CanvasPosition,
    /// Timing configuration.
    pub config: MovementConfig,
}
