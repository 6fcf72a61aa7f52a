// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan/zoom state of the spatial canvas.
///
/// `x` and `y` are the pan offset in world units; `scale` is the uniform
/// zoom factor. A position is a plain value recreated every frame by the
/// caller; nothing in this workspace stores one across calls.
///
/// `scale` is expected to be positive. The evaluators in this crate never
/// assume it: a non-positive or non-finite scale is treated as out of
/// bounds and clamped to a positive value rather than faulted.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CanvasPosition {
    /// Horizontal pan offset in world units.
    pub x: f64,
    /// Vertical pan offset in world units.
    pub y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl CanvasPosition {
    /// The resting position: no pan, unit zoom.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Creates a position from pan offsets and a zoom factor.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Returns `true` when every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite()
    }

    /// Linearly interpolates toward `other` by `t`.
    ///
    /// Each field interpolates independently; `t = 0.0` returns `self`
    /// exactly and `t = 1.0` returns `other` exactly. `t` is not clamped,
    /// so callers can overshoot deliberately.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

/// Allowed range for canvas positions and zoom within one canvas instance.
///
/// Configured once per canvas by the caller and passed by reference into
/// every evaluation. Well-formed constraints satisfy `min <= max` per axis;
/// the evaluators normalize inverted ranges instead of faulting, and
/// [`validate_boundary_constraints`](crate::validate_boundary_constraints)
/// surfaces the problem as a warning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConstraints {
    /// Lower bound for pan and scale.
    pub min_position: CanvasPosition,
    /// Upper bound for pan and scale.
    pub max_position: CanvasPosition,
    /// Lower bound for the zoom factor. Authoritative for the scale axis.
    pub min_scale: f64,
    /// Upper bound for the zoom factor. Authoritative for the scale axis.
    pub max_scale: f64,
    /// Symmetric inset applied to every side of the effective viewport
    /// bounds, in world units.
    pub padding: f64,
}

impl ViewportConstraints {
    /// Creates constraints from symmetric pan extents and a zoom range.
    ///
    /// The pan range becomes `[-half_extent_x, half_extent_x]` on x and
    /// `[-half_extent_y, half_extent_y]` on y.
    #[must_use]
    pub fn symmetric(half_extent_x: f64, half_extent_y: f64, min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_position: CanvasPosition::new(-half_extent_x, -half_extent_y, min_scale),
            max_position: CanvasPosition::new(half_extent_x, half_extent_y, max_scale),
            min_scale,
            max_scale,
            padding: 0.0,
        }
    }

    /// Returns `true` when every axis satisfies `min <= max` and all bound
    /// fields are finite.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let finite = self.min_position.is_finite()
            && self.max_position.is_finite()
            && self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.padding.is_finite();
        finite
            && self.min_position.x <= self.max_position.x
            && self.min_position.y <= self.max_position.y
            && self.min_scale <= self.max_scale
    }

    /// Normalized `(min, max)` pan range on the x axis.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        ordered_range(self.min_position.x, self.max_position.x)
    }

    /// Normalized `(min, max)` pan range on the y axis.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        ordered_range(self.min_position.y, self.max_position.y)
    }

    /// Normalized `(min, max)` zoom range.
    #[must_use]
    pub fn scale_range(&self) -> (f64, f64) {
        ordered_range(self.min_scale, self.max_scale)
    }

    /// Sanitized non-negative padding.
    #[must_use]
    pub fn padding_or_zero(&self) -> f64 {
        if self.padding.is_finite() {
            self.padding.max(0.0)
        } else {
            0.0
        }
    }
}

impl Default for ViewportConstraints {
    fn default() -> Self {
        Self::symmetric(600.0, 400.0, 0.5, 3.0)
    }
}

/// Sanitizes a bound pair: non-finite endpoints fall back to zero, and an
/// inverted pair is swapped so that `min <= max` always holds.
pub(crate) fn ordered_range(a: f64, b: f64) -> (f64, f64) {
    let a = if a.is_finite() { a } else { 0.0 };
    let b = if b.is_finite() { b } else { 0.0 };
    if a <= b { (a, b) } else { (b, a) }
}

/// Extent of a normalized range, floored to `1.0` so that severity ratios
/// stay finite for degenerate (zero-width) ranges.
pub(crate) fn reference_range(range: (f64, f64)) -> f64 {
    let extent = range.1 - range.0;
    if extent > f64::EPSILON { extent } else { 1.0 }
}
