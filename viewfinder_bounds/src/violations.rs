// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::position::{CanvasPosition, ViewportConstraints, reference_range};

/// Identifies which bound a position has crossed.
///
/// At most one kind per axis can be reported for a single position, so a
/// full report holds between zero and six entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// Pan below the minimum x bound.
    XMin,
    /// Pan above the maximum x bound.
    XMax,
    /// Pan below the minimum y bound.
    YMin,
    /// Pan above the maximum y bound.
    YMax,
    /// Zoom below the minimum scale.
    ScaleMin,
    /// Zoom above the maximum scale.
    ScaleMax,
}

impl BoundKind {
    /// The flag bit corresponding to this kind.
    #[must_use]
    pub fn flag(self) -> BoundFlags {
        match self {
            Self::XMin => BoundFlags::X_MIN,
            Self::XMax => BoundFlags::X_MAX,
            Self::YMin => BoundFlags::Y_MIN,
            Self::YMax => BoundFlags::Y_MAX,
            Self::ScaleMin => BoundFlags::SCALE_MIN,
            Self::ScaleMax => BoundFlags::SCALE_MAX,
        }
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::XMin => "x-min",
            Self::XMax => "x-max",
            Self::YMin => "y-min",
            Self::YMax => "y-max",
            Self::ScaleMin => "scale-min",
            Self::ScaleMax => "scale-max",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Set of violated bounds, for cheap caller-side dispatch (for example,
    /// bouncing on the x axis only).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BoundFlags: u8 {
        /// Pan below the minimum x bound.
        const X_MIN = 0b0000_0001;
        /// Pan above the maximum x bound.
        const X_MAX = 0b0000_0010;
        /// Pan below the minimum y bound.
        const Y_MIN = 0b0000_0100;
        /// Pan above the maximum y bound.
        const Y_MAX = 0b0000_1000;
        /// Zoom below the minimum scale.
        const SCALE_MIN = 0b0001_0000;
        /// Zoom above the maximum scale.
        const SCALE_MAX = 0b0010_0000;
    }
}

/// One crossed bound, with how far past it the position sits and a
/// human-readable correction hint.
///
/// Produced transiently by [`constraint_violations`]; the caller typically
/// turns it into UI feedback (a bounce, an edge glow) and drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryViolation {
    /// Which bound was crossed.
    pub kind: BoundKind,
    /// Overshoot distance divided by the axis reference range.
    ///
    /// Always `>= 0`, and strictly increasing with the overshoot distance
    /// on a given axis: of two positions past the same bound, the farther
    /// one reports the larger severity.
    pub severity: f64,
    /// Non-empty correction hint, e.g. `"decrease x to at most 600"`.
    pub suggestion: String,
}

/// In-line storage for the at-most-six violations of a single position.
pub type ViolationList = SmallVec<[BoundaryViolation; 6]>;

/// Reports every bound the position crosses, at most one per axis.
///
/// Severity is the overshoot distance normalized by the axis range (a
/// degenerate zero-width range normalizes by `1.0`), so severities order the
/// same way distances do. A non-finite field counts as crossing that axis's
/// minimum bound with unit severity. Never panics.
#[must_use]
pub fn constraint_violations(
    position: &CanvasPosition,
    constraints: &ViewportConstraints,
) -> ViolationList {
    let mut out = ViolationList::new();
    check_axis(position.x, constraints.x_range(), "x", BoundKind::XMin, BoundKind::XMax, &mut out);
    check_axis(position.y, constraints.y_range(), "y", BoundKind::YMin, BoundKind::YMax, &mut out);
    check_axis(
        position.scale,
        constraints.scale_range(),
        "scale",
        BoundKind::ScaleMin,
        BoundKind::ScaleMax,
        &mut out,
    );
    out
}

/// Flag-set summary of [`constraint_violations`].
#[must_use]
pub fn violated_bounds(position: &CanvasPosition, constraints: &ViewportConstraints) -> BoundFlags {
    constraint_violations(position, constraints)
        .iter()
        .fold(BoundFlags::empty(), |acc, v| acc | v.kind.flag())
}

fn check_axis(
    value: f64,
    range: (f64, f64),
    axis: &str,
    min_kind: BoundKind,
    max_kind: BoundKind,
    out: &mut ViolationList,
) {
    let (min, max) = range;
    if !value.is_finite() {
        out.push(BoundaryViolation {
            kind: min_kind,
            severity: 1.0,
            suggestion: format!("replace non-finite {axis} with a value in [{min}, {max}]"),
        });
        return;
    }
    let reference = reference_range(range);
    if value < min {
        out.push(BoundaryViolation {
            kind: min_kind,
            severity: (min - value) / reference,
            suggestion: format!("increase {axis} to at least {min}"),
        });
    } else if value > max {
        out.push(BoundaryViolation {
            kind: max_kind,
            severity: (value - max) / reference,
            suggestion: format!("decrease {axis} to at most {max}"),
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{BoundFlags, BoundKind, constraint_violations, violated_bounds};
    use crate::position::{CanvasPosition, ViewportConstraints};

    fn constraints() -> ViewportConstraints {
        ViewportConstraints::symmetric(600.0, 400.0, 0.5, 3.0)
    }

    #[test]
    fn in_bounds_position_reports_nothing() {
        let c = constraints();
        assert!(constraint_violations(&CanvasPosition::new(0.0, 0.0, 1.0), &c).is_empty());
        // Exactly on the bound is inside.
        assert!(constraint_violations(&CanvasPosition::new(600.0, -400.0, 3.0), &c).is_empty());
    }

    #[test]
    fn three_bounds_crossed_reports_three_kinds() {
        let c = constraints();
        let v = constraint_violations(&CanvasPosition::new(1000.0, 800.0, 5.0), &c);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].kind, BoundKind::XMax);
        assert_eq!(v[1].kind, BoundKind::YMax);
        assert_eq!(v[2].kind, BoundKind::ScaleMax);
        for violation in &v {
            assert!(violation.severity > 0.0);
            assert!(!violation.suggestion.is_empty());
        }
    }

    #[test]
    fn severity_orders_with_distance() {
        let c = constraints();
        let near = constraint_violations(&CanvasPosition::new(700.0, 0.0, 1.0), &c);
        let far = constraint_violations(&CanvasPosition::new(1300.0, 0.0, 1.0), &c);
        assert_eq!(near.len(), 1);
        assert_eq!(far.len(), 1);
        assert!(near[0].severity < far[0].severity);
    }

    #[test]
    fn at_most_one_violation_per_axis() {
        let c = constraints();
        let v = constraint_violations(&CanvasPosition::new(-1e9, 1e9, 0.0), &c);
        assert_eq!(v.len(), 3);
        let kinds: Vec<_> = v.iter().map(|x| x.kind).collect();
        assert!(kinds.contains(&BoundKind::XMin));
        assert!(kinds.contains(&BoundKind::YMax));
        assert!(kinds.contains(&BoundKind::ScaleMin));
    }

    #[test]
    fn non_finite_fields_count_as_min_violations() {
        let c = constraints();
        let v = constraint_violations(&CanvasPosition::new(f64::NAN, 0.0, 1.0), &c);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, BoundKind::XMin);
        assert_eq!(v[0].severity, 1.0);
        assert!(v[0].suggestion.contains("non-finite"));
    }

    #[test]
    fn flags_summarize_the_list() {
        let c = constraints();
        let flags = violated_bounds(&CanvasPosition::new(1000.0, -800.0, 1.0), &c);
        assert_eq!(flags, BoundFlags::X_MAX | BoundFlags::Y_MIN);
    }

    #[test]
    fn inverted_constraints_still_report_sanely() {
        let mut c = constraints();
        core::mem::swap(&mut c.min_position.x, &mut c.max_position.x);
        let v = constraint_violations(&CanvasPosition::new(1000.0, 0.0, 1.0), &c);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, BoundKind::XMax);
    }
}
