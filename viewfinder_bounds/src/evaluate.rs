// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::position::{CanvasPosition, ViewportConstraints, reference_range};
use crate::violations::violated_bounds;

/// Smallest extent the effective viewport bounds may collapse to.
const MIN_BOUNDS_EXTENT: f64 = 1e-6;

/// Returns `true` when the position lies within the constraints.
///
/// Inclusive at the exact bounds: a position equal to `max_position.x` is
/// inside. Non-finite fields count as out of bounds. Inverted constraint
/// ranges are normalized rather than faulted.
#[must_use]
pub fn is_position_within_bounds(
    position: &CanvasPosition,
    constraints: &ViewportConstraints,
) -> bool {
    if !position.is_finite() {
        return false;
    }
    let (x_min, x_max) = constraints.x_range();
    let (y_min, y_max) = constraints.y_range();
    let (s_min, s_max) = constraints.scale_range();
    position.x >= x_min
        && position.x <= x_max
        && position.y >= y_min
        && position.y <= y_max
        && position.scale >= s_min
        && position.scale <= s_max
}

/// Clamps the position into the constraint ranges, axis by axis.
///
/// Values inside their range pass through unchanged, so the operation is
/// idempotent. A `NaN` field resolves to the midpoint of its normalized
/// range — a garbage frame lands dead-center instead of sticking to an
/// edge — and the resulting scale is floored to a positive value.
#[must_use]
pub fn clamp_to_viewport(
    position: &CanvasPosition,
    constraints: &ViewportConstraints,
) -> CanvasPosition {
    let scale = clamp_axis(position.scale, constraints.scale_range()).max(f64::MIN_POSITIVE);
    CanvasPosition {
        x: clamp_axis(position.x, constraints.x_range()),
        y: clamp_axis(position.y, constraints.y_range()),
        scale,
    }
}

fn clamp_axis(value: f64, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    if value.is_nan() {
        return (min + max) * 0.5;
    }
    value.clamp(min, max)
}

/// How [`validate_boundary_constraints`] treats out-of-bounds positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Enforcement {
    /// Clamp to the exact bounds. Out-of-bounds input is invalid.
    Hard,
    /// Permit overshoot up to `tolerance` times the axis reference range.
    ///
    /// Overshoot within the tolerance keeps the position valid but emits
    /// warnings; overshoot past it clamps to the widened range and marks
    /// the result invalid.
    Soft {
        /// Allowed overshoot as a fraction of each axis's reference range.
        tolerance: f64,
    },
}

impl Enforcement {
    /// Soft enforcement with the default 10% overshoot tolerance.
    #[must_use]
    pub fn soft() -> Self {
        Self::Soft { tolerance: 0.1 }
    }
}

impl Default for Enforcement {
    fn default() -> Self {
        Self::Hard
    }
}

/// Result of [`validate_boundary_constraints`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryValidation {
    /// `false` when the position had to be corrected.
    pub is_valid: bool,
    /// The position after enforcement; always finite, always usable.
    pub adjusted_position: CanvasPosition,
    /// Human-readable notes: tolerated overshoots, ill-formed constraints.
    pub warnings: Vec<String>,
    /// The enforcement that produced this result.
    pub enforcement: Enforcement,
}

/// Validates a position against constraints under the given enforcement.
///
/// Total: ill-formed constraints (`min > max`, non-finite bounds) are
/// reported through `warnings` and evaluated against normalized ranges,
/// never panicked on.
#[must_use]
pub fn validate_boundary_constraints(
    position: &CanvasPosition,
    constraints: &ViewportConstraints,
    enforcement: Enforcement,
) -> BoundaryValidation {
    let mut warnings = Vec::new();
    if !constraints.is_well_formed() {
        warnings.push(String::from(
            "constraints are ill-formed (min exceeds max or non-finite bound); ranges were normalized",
        ));
    }

    match enforcement {
        Enforcement::Hard => {
            let adjusted = clamp_to_viewport(position, constraints);
            let is_valid = is_position_within_bounds(position, constraints);
            BoundaryValidation {
                is_valid,
                adjusted_position: adjusted,
                warnings,
                enforcement,
            }
        }
        Enforcement::Soft { tolerance } => {
            let tolerance = if tolerance.is_finite() {
                tolerance.max(0.0)
            } else {
                0.0
            };
            let widened = widen(constraints, tolerance);
            let adjusted = clamp_to_viewport(position, &widened);
            let is_valid = is_position_within_bounds(position, &widened);
            if !is_position_within_bounds(position, constraints) {
                for violation in crate::constraint_violations(position, constraints) {
                    warnings.push(format!(
                        "{} overshoot (severity {:.3}): {}",
                        violation.kind, violation.severity, violation.suggestion
                    ));
                }
            }
            BoundaryValidation {
                is_valid,
                adjusted_position: adjusted,
                warnings,
                enforcement,
            }
        }
    }
}

fn widen(constraints: &ViewportConstraints, tolerance: f64) -> ViewportConstraints {
    let (x_min, x_max) = constraints.x_range();
    let (y_min, y_max) = constraints.y_range();
    let (s_min, s_max) = constraints.scale_range();
    let dx = reference_range((x_min, x_max)) * tolerance;
    let dy = reference_range((y_min, y_max)) * tolerance;
    let ds = reference_range((s_min, s_max)) * tolerance;
    ViewportConstraints {
        min_position: CanvasPosition::new(x_min - dx, y_min - dy, s_min - ds),
        max_position: CanvasPosition::new(x_max + dx, y_max + dy, s_max + ds),
        min_scale: s_min - ds,
        max_scale: s_max + ds,
        padding: constraints.padding,
    }
}

/// Effective pannable world region for a viewport at a given zoom.
///
/// Produced by [`viewport_bounds`]. `width` and `height` are always
/// strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveBounds {
    /// Minimum reachable x, in world units.
    pub left: f64,
    /// Maximum reachable x, in world units.
    pub right: f64,
    /// Minimum reachable y, in world units.
    pub top: f64,
    /// Maximum reachable y, in world units.
    pub bottom: f64,
    /// `right - left`.
    pub width: f64,
    /// `bottom - top`.
    pub height: f64,
}

impl EffectiveBounds {
    /// The bounds as a kurbo rectangle.
    #[must_use]
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Computes the effective pannable bounds for a viewport at a given zoom.
///
/// The region is the intersection of the constraint extents and the
/// centered viewport extent, both expressed in world units at this zoom
/// (divided by `scale`), shrunk by `constraints.padding` on every side.
/// Higher zoom therefore yields a strictly tighter region. The region is
/// floored to a tiny positive extent per axis, so `width` and `height`
/// never reach zero even for degenerate input.
#[must_use]
pub fn viewport_bounds(
    viewport: Size,
    scale: f64,
    constraints: &ViewportConstraints,
) -> EffectiveBounds {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let inv = 1.0 / scale;
    let padding = constraints.padding_or_zero();

    let half_vw = viewport.width.abs() * 0.5 * inv;
    let half_vh = viewport.height.abs() * 0.5 * inv;
    let (x_min, x_max) = constraints.x_range();
    let (y_min, y_max) = constraints.y_range();

    let (left, right) = bounded_axis(x_min * inv, x_max * inv, half_vw, padding);
    let (top, bottom) = bounded_axis(y_min * inv, y_max * inv, half_vh, padding);

    EffectiveBounds {
        left,
        right,
        top,
        bottom,
        width: right - left,
        height: bottom - top,
    }
}

fn bounded_axis(c_min: f64, c_max: f64, half_view: f64, padding: f64) -> (f64, f64) {
    let mut lo = c_min.max(-half_view) + padding;
    let mut hi = c_max.min(half_view) - padding;
    if hi - lo < MIN_BOUNDS_EXTENT {
        let mid = (lo + hi) * 0.5;
        let mid = if mid.is_finite() { mid } else { 0.0 };
        lo = mid - MIN_BOUNDS_EXTENT * 0.5;
        hi = mid + MIN_BOUNDS_EXTENT * 0.5;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{
        Enforcement, clamp_to_viewport, is_position_within_bounds, validate_boundary_constraints,
        viewport_bounds,
    };
    use crate::position::{CanvasPosition, ViewportConstraints};

    fn constraints() -> ViewportConstraints {
        ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0)
    }

    #[test]
    fn containment_is_inclusive_at_bounds() {
        let c = constraints();
        assert!(is_position_within_bounds(&c.max_position, &c));
        assert!(is_position_within_bounds(&c.min_position, &c));
        assert!(is_position_within_bounds(&CanvasPosition::new(600.0, 0.0, 1.0), &c));
        assert!(!is_position_within_bounds(&CanvasPosition::new(600.1, 0.0, 1.0), &c));
    }

    #[test]
    fn nan_fields_are_out_of_bounds_without_panicking() {
        let c = constraints();
        assert!(!is_position_within_bounds(&CanvasPosition::new(f64::NAN, 0.0, 1.0), &c));
        assert!(!is_position_within_bounds(&CanvasPosition::new(0.0, 0.0, f64::NAN), &c));
    }

    #[test]
    fn clamp_passes_in_bounds_through_and_caps_overshoot() {
        let c = constraints();
        let inside = CanvasPosition::new(100.0, -200.0, 2.0);
        assert_eq!(clamp_to_viewport(&inside, &c), inside);

        let clamped = clamp_to_viewport(&CanvasPosition::new(1000.0, 0.0, 1.0), &c);
        assert_eq!(clamped, CanvasPosition::new(600.0, 0.0, 1.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let c = constraints();
        for p in [
            CanvasPosition::new(1e9, -1e9, 100.0),
            CanvasPosition::new(f64::NAN, f64::NAN, f64::NAN),
            CanvasPosition::new(0.0, 0.0, 1.0),
        ] {
            let once = clamp_to_viewport(&p, &c);
            let twice = clamp_to_viewport(&once, &c);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn clamp_resolves_nan_to_range_midpoint() {
        let c = constraints();
        let p = clamp_to_viewport(&CanvasPosition::new(f64::NAN, f64::NAN, f64::NAN), &c);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert!((p.scale - 1.75).abs() < 1e-12);
        assert!(p.is_finite());
    }

    #[test]
    fn hard_validation_clamps_and_flags() {
        let c = constraints();
        let result = validate_boundary_constraints(
            &CanvasPosition::new(700.0, 0.0, 1.0),
            &c,
            Enforcement::Hard,
        );
        assert!(!result.is_valid);
        assert_eq!(result.adjusted_position.x, 600.0);
        assert!(result.warnings.is_empty());

        let ok = validate_boundary_constraints(
            &CanvasPosition::new(0.0, 0.0, 1.0),
            &c,
            Enforcement::Hard,
        );
        assert!(ok.is_valid);
    }

    #[test]
    fn soft_validation_tolerates_overshoot_with_warnings() {
        let c = constraints();
        // X range is 1200 wide; 10% tolerance permits 120 units of overshoot.
        let result = validate_boundary_constraints(
            &CanvasPosition::new(650.0, 0.0, 1.0),
            &c,
            Enforcement::soft(),
        );
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
        assert_eq!(result.adjusted_position.x, 650.0);

        let too_far = validate_boundary_constraints(
            &CanvasPosition::new(800.0, 0.0, 1.0),
            &c,
            Enforcement::soft(),
        );
        assert!(!too_far.is_valid);
        assert!((too_far.adjusted_position.x - 720.0).abs() < 1e-9);
    }

    #[test]
    fn ill_formed_constraints_warn_instead_of_panicking() {
        let mut c = constraints();
        c.min_position.x = 700.0;
        c.max_position.x = -700.0;
        let result = validate_boundary_constraints(
            &CanvasPosition::new(0.0, 0.0, 1.0),
            &c,
            Enforcement::Hard,
        );
        assert!(!result.warnings.is_empty());
        assert!(result.is_valid);
    }

    #[test]
    fn viewport_bounds_tighten_with_zoom() {
        let c = constraints();
        let viewport = Size::new(1920.0, 1080.0);
        let wide = viewport_bounds(viewport, 1.0, &c);
        let tight = viewport_bounds(viewport, 2.0, &c);
        assert!(tight.width < wide.width);
        assert!(tight.height < wide.height);
        assert!(wide.width > 0.0 && wide.height > 0.0);
        assert!((wide.width - (wide.right - wide.left)).abs() < 1e-12);
    }

    #[test]
    fn padding_shrinks_bounds_symmetrically() {
        let mut c = constraints();
        let viewport = Size::new(1920.0, 1080.0);
        let plain = viewport_bounds(viewport, 1.0, &c);
        c.padding = 50.0;
        let padded = viewport_bounds(viewport, 1.0, &c);
        assert!((padded.left - (plain.left + 50.0)).abs() < 1e-9);
        assert!((padded.right - (plain.right - 50.0)).abs() < 1e-9);
        assert!((padded.top - (plain.top + 50.0)).abs() < 1e-9);
        assert!((padded.bottom - (plain.bottom - 50.0)).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewport_still_yields_positive_extent() {
        let c = constraints();
        let bounds = viewport_bounds(Size::ZERO, f64::NAN, &c);
        assert!(bounds.width > 0.0);
        assert!(bounds.height > 0.0);
    }
}
