// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural validation of grid configurations.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::layout::GridConfiguration;

/// Cells narrower or shorter than this are too small to use.
const MIN_USABLE_CELL: f64 = 44.0;

/// A structural problem with a grid configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// More sections than the grid has cells.
    Overflow {
        /// Number of sections requested.
        sections: usize,
        /// Number of cells available.
        cells: u64,
    },
    /// Computed cell size falls below the usability floor.
    CellTooSmall {
        /// Computed cell width.
        width: f64,
        /// Computed cell height.
        height: f64,
    },
    /// Zero or non-finite layout dimensions.
    DegenerateDimensions,
    /// The same section name was supplied more than once.
    DuplicateSection(
        /// The repeated name.
        String,
    ),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { sections, cells } => {
                write!(f, "{sections} sections overflow {cells} grid cells")
            }
            Self::CellTooSmall { width, height } => {
                write!(f, "cell size {width:.1}x{height:.1} is below the {MIN_USABLE_CELL} floor")
            }
            Self::DegenerateDimensions => f.write_str("layout width/height must be positive and finite"),
            Self::DuplicateSection(name) => write!(f, "section {name:?} appears more than once"),
        }
    }
}

/// Result of [`validate_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutValidation {
    /// `true` when no structural problems were found.
    pub is_valid: bool,
    /// Every problem found, in a stable order.
    pub errors: Vec<LayoutError>,
}

/// Checks a configuration against the sections it has to hold.
///
/// Total: degenerate configs (zero or non-finite extents, zero rows or
/// columns) produce errors, never panics. A valid result means every
/// section fits in its own usable cell.
#[must_use]
pub fn validate_layout(config: &GridConfiguration, sections: &[&str]) -> LayoutValidation {
    let mut errors = Vec::new();

    let degenerate = !config.width.is_finite()
        || !config.height.is_finite()
        || config.width <= 0.0
        || config.height <= 0.0;
    if degenerate {
        errors.push(LayoutError::DegenerateDimensions);
    }

    let cells = config.cell_count();
    if sections.len() as u64 > cells {
        errors.push(LayoutError::Overflow {
            sections: sections.len(),
            cells,
        });
    }

    if !degenerate {
        let (cell_w, cell_h) = config.base_cell_size();
        if cell_w < MIN_USABLE_CELL || cell_h < MIN_USABLE_CELL {
            errors.push(LayoutError::CellTooSmall {
                width: cell_w,
                height: cell_h,
            });
        }
    }

    let mut seen = HashSet::new();
    for name in sections {
        if !seen.insert(*name) {
            errors.push(LayoutError::DuplicateSection((*name).to_string()));
        }
    }

    LayoutValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use crate::layout::GridConfiguration;
    use crate::sections::Section;

    use super::{LayoutError, validate_layout};

    #[test]
    fn canonical_sections_fit_a_roomy_grid() {
        let config = GridConfiguration::grid(3, 2, 900.0, 600.0);
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
        let result = validate_layout(&config, &names);
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn overflow_is_flagged() {
        let config = GridConfiguration::grid(1, 2, 900.0, 600.0);
        let result = validate_layout(&config, &["hero", "capture", "about"]);
        assert!(!result.is_valid);
        assert!(matches!(
            result.errors[0],
            LayoutError::Overflow { sections: 3, cells: 2 }
        ));
    }

    #[test]
    fn tiny_cells_are_flagged() {
        let config = GridConfiguration::grid(10, 10, 300.0, 300.0);
        let result = validate_layout(&config, &["hero"]);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| matches!(e, LayoutError::CellTooSmall { .. })));
    }

    #[test]
    fn degenerate_dimensions_never_panic() {
        for config in [
            GridConfiguration::grid(3, 2, 0.0, 600.0),
            GridConfiguration::grid(3, 2, f64::NAN, 600.0),
            GridConfiguration::grid(3, 2, 900.0, f64::NEG_INFINITY),
        ] {
            let result = validate_layout(&config, &["hero"]);
            assert!(!result.is_valid);
            assert!(result.errors.contains(&LayoutError::DegenerateDimensions));
        }
    }

    #[test]
    fn duplicate_sections_are_flagged() {
        let config = GridConfiguration::grid(3, 2, 900.0, 600.0);
        let result = validate_layout(&config, &["hero", "hero"]);
        assert!(!result.is_valid);
        assert!(matches!(result.errors[0], LayoutError::DuplicateSection(ref n) if n == "hero"));
    }

    #[test]
    fn errors_render_human_readably() {
        let config = GridConfiguration::grid(1, 1, 900.0, 600.0);
        let result = validate_layout(&config, &["hero", "capture"]);
        let rendered = format!("{}", result.errors[0]);
        assert!(rendered.contains("overflow"));
    }
}
