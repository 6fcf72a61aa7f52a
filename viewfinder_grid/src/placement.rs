// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority scoring for section placements.

use alloc::string::String;
use alloc::vec::Vec;

use crate::layout::GridConfiguration;
use crate::sections::section_index;

/// A section slated for placement, with the weight the caller assigns to
/// its content and the priority this crate computes for it.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPlacement {
    /// Section name.
    pub section: String,
    /// Caller-supplied content weight; heavier content wants attention.
    pub weight: f64,
    /// Computed priority; filled in by [`optimize_placement`].
    pub priority: f64,
}

impl SectionPlacement {
    /// Creates a placement with zero priority.
    #[must_use]
    pub fn new(section: String, weight: f64) -> Self {
        Self {
            section,
            weight,
            priority: 0.0,
        }
    }
}

/// Scores and orders placements by visual priority.
///
/// The policy: priority is `weight × (1 + center_proximity)`, where
/// `center_proximity` in `[0, 1]` is one minus the normalized Chebyshev
/// distance of the section's cell from the grid center — heavy content
/// near the visual center sorts first. Non-finite or negative weights are
/// treated as zero, so every priority is finite. The result holds every
/// input exactly once; ties keep their input order.
#[must_use]
pub fn optimize_placement(
    placements: &[SectionPlacement],
    config: &GridConfiguration,
) -> Vec<SectionPlacement> {
    let mut scored: Vec<SectionPlacement> = placements
        .iter()
        .map(|p| {
            let weight = if p.weight.is_finite() {
                p.weight.max(0.0)
            } else {
                0.0
            };
            SectionPlacement {
                section: p.section.clone(),
                weight: p.weight,
                priority: weight * (1.0 + center_proximity(&p.section, config)),
            }
        })
        .collect();
    scored.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(core::cmp::Ordering::Equal));
    scored
}

/// Closeness of a section's cell to the grid center, in `[0, 1]`.
fn center_proximity(section: &str, config: &GridConfiguration) -> f64 {
    let cols = u64::from(config.cols.max(1));
    let rows = u64::from(config.rows.max(1));
    let idx = section_index(section) as u64 % (cols * rows);
    let (x, y) = ((idx % cols) as f64, (idx / cols) as f64);
    let center_x = (cols as f64 - 1.0) * 0.5;
    let center_y = (rows as f64 - 1.0) * 0.5;
    let half_span = center_x.max(center_y).max(1.0);
    let distance = (x - center_x).abs().max((y - center_y).abs());
    1.0 - (distance / half_span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::layout::GridConfiguration;

    use super::{SectionPlacement, optimize_placement};

    fn config() -> GridConfiguration {
        GridConfiguration::grid(3, 2, 900.0, 600.0)
    }

    #[test]
    fn every_input_appears_exactly_once() {
        let input = vec![
            SectionPlacement::new("hero".to_string(), 3.0),
            SectionPlacement::new("capture".to_string(), 5.0),
            SectionPlacement::new("contact".to_string(), 1.0),
        ];
        let out = optimize_placement(&input, &config());
        assert_eq!(out.len(), 3);
        for p in &input {
            assert_eq!(out.iter().filter(|o| o.section == p.section).count(), 1);
        }
    }

    #[test]
    fn priorities_are_finite_and_weight_sensitive() {
        let input = vec![
            SectionPlacement::new("hero".to_string(), 1.0),
            SectionPlacement::new("hero2".to_string(), f64::NAN),
            SectionPlacement::new("hero3".to_string(), f64::INFINITY),
            SectionPlacement::new("hero4".to_string(), -5.0),
        ];
        let out = optimize_placement(&input, &config());
        for p in &out {
            assert!(p.priority.is_finite());
            assert!(p.priority >= 0.0);
        }
    }

    #[test]
    fn heavier_content_in_the_same_cell_sorts_first() {
        // Same section name places in the same cell, isolating weight.
        let light = vec![SectionPlacement::new("capture".to_string(), 1.0)];
        let heavy = vec![SectionPlacement::new("capture".to_string(), 4.0)];
        let light = optimize_placement(&light, &config());
        let heavy = optimize_placement(&heavy, &config());
        assert!(heavy[0].priority > light[0].priority);
    }

    #[test]
    fn ordering_is_descending_by_priority() {
        let input: Vec<SectionPlacement> = ["hero", "capture", "portfolio", "about"]
            .iter()
            .enumerate()
            .map(|(i, name)| SectionPlacement::new(name.to_string(), (i + 1) as f64))
            .collect();
        let out = optimize_placement(&input, &config());
        for pair in out.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }
}
