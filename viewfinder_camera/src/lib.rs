// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Camera: named camera transitions for the spatial canvas.
//!
//! The canvas navigates between portfolio sections with transitions named
//! after camera techniques: pan/tilt, zoom, dolly zoom, rack focus, and
//! match cut. Each transition is a pure function of a start state, an end
//! state, and an *already eased* progress in `[0, 1]`:
//!
//! - [`pan_tilt`] — independent linear interpolation of pan and zoom.
//! - [`zoom`] — pan/tilt plus monotonic opacity/blur effects and an
//!   optional anchor point passed through for the transform origin.
//! - [`dolly_zoom`] — the one-shot "vertigo" effect; intensity peaks at
//!   mid-transition, and a caller-owned `has_engaged` flag damps replays.
//! - [`rack_focus`] — subtle blur/opacity/scale shifts for
//!   hover/focus/blur element states.
//! - [`match_cut`] — morphs one element's bounds into another's.
//!
//! Easing lives upstream in `viewfinder_easing` and is composed in
//! explicitly by the caller (or by [`CameraMove`], the per-tick driver
//! that maps elapsed time to eased progress). The interpolators never see
//! a duration, which is what guarantees that two calls with equal
//! progress and different durations produce identical frames.
//!
//! ## Driving a transition
//!
//! ```rust
//! use viewfinder_bounds::{CanvasPosition, ViewportConstraints, clamp_to_viewport};
//! use viewfinder_camera::{CameraMove, MovementConfig};
//!
//! let start = CanvasPosition::IDENTITY;
//! let end = CanvasPosition::new(400.0, 300.0, 1.5);
//! let movement = CameraMove::new(start, end, MovementConfig::default());
//!
//! let constraints = ViewportConstraints::default();
//! // One animation tick, 320 ms in: interpolate, then clamp before applying.
//! let frame = movement.position_at(320.0);
//! let applied = clamp_to_viewport(&frame, &constraints);
//! assert!(applied.is_finite());
//! ```
//!
//! This crate is `no_std` (with `alloc` for the match-cut transform
//! origin string).

#![no_std]

extern crate alloc;

mod drive;
mod match_cut;
mod rack_focus;
mod transitions;

pub use drive::{CameraMove, CameraMoveDebugInfo, MovementConfig};
pub use match_cut::{MatchCutFrame, match_cut};
pub use rack_focus::{FocusDepth, RackFocusFrame, rack_focus};
pub use transitions::{DollyZoomFrame, ZoomEffects, ZoomFrame, dolly_zoom, pan_tilt, zoom};
