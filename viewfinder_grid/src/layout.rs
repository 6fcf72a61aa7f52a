// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid and circular section placement.

use crate::sections::section_index;

/// Cell dimensions never collapse below this, even for degenerate configs.
const MIN_CELL_DIMENSION: f64 = 1.0;
/// Reference viewport width for responsive cell growth.
const REFERENCE_VIEWPORT_WIDTH: f64 = 1280.0;
/// Fraction of the smaller cell dimension used as inter-cell spacing.
const SPACING_RATIO: f64 = 0.1;
/// Fraction of the half-extent used as the circular layout radius.
const CIRCULAR_RADIUS_RATIO: f64 = 0.8;

/// Spatial arrangement mode for the portfolio sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridLayout {
    /// Rectangular rows-by-columns grid.
    #[default]
    Grid,
    /// Sections on a circle around the canvas center.
    Circular,
}

/// Host viewport metrics, as supplied by the UI framework each call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    /// Device pixel ratio.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Creates viewport metrics.
    #[must_use]
    pub const fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0, 1.0)
    }
}

/// Describes the spatial arrangement of sections on the canvas.
///
/// Supplied by the caller per call and validated structurally by
/// [`validate_layout`](crate::validate_layout); the placement functions
/// themselves sanitize degenerate values instead of faulting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfiguration {
    /// Arrangement mode.
    pub layout: GridLayout,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Total layout width in world units.
    pub width: f64,
    /// Total layout height in world units.
    pub height: f64,
}

impl GridConfiguration {
    /// A rectangular grid configuration.
    #[must_use]
    pub const fn grid(rows: u32, cols: u32, width: f64, height: f64) -> Self {
        Self {
            layout: GridLayout::Grid,
            rows,
            cols,
            width,
            height,
        }
    }

    /// A circular configuration; rows/columns still bound the cell count.
    #[must_use]
    pub const fn circular(rows: u32, cols: u32, width: f64, height: f64) -> Self {
        Self {
            layout: GridLayout::Circular,
            rows,
            cols,
            width,
            height,
        }
    }

    /// Total number of cells, with rows and columns floored to one.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows.max(1)) * u64::from(self.cols.max(1))
    }

    pub(crate) fn sanitized_size(&self) -> (f64, f64) {
        (sanitize_dimension(self.width), sanitize_dimension(self.height))
    }

    pub(crate) fn base_cell_size(&self) -> (f64, f64) {
        let (w, h) = self.sanitized_size();
        let cell_w = (w / f64::from(self.cols.max(1))).max(MIN_CELL_DIMENSION);
        let cell_h = (h / f64::from(self.rows.max(1))).max(MIN_CELL_DIMENSION);
        (cell_w, cell_h)
    }
}

fn sanitize_dimension(v: f64) -> f64 {
    if v.is_finite() { v.abs() } else { 0.0 }
}

/// Resolved grid metrics for a configuration under a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialGrid {
    /// Cell width in world units; always positive.
    pub cell_width: f64,
    /// Cell height in world units; always positive.
    pub cell_height: f64,
    /// Pass-through of `config.width`.
    pub total_width: f64,
    /// Pass-through of `config.height`.
    pub total_height: f64,
    /// Inter-cell spacing; positive and below both cell dimensions.
    pub spacing: f64,
    /// Arrangement mode this grid was resolved for.
    pub layout: GridLayout,
}

/// Resolves grid metrics for a configuration under a viewport.
///
/// Cell dimensions derive from the configured extents divided by the
/// row/column counts, grown by a responsive factor that never shrinks as
/// the viewport grows, and floored to a small positive size for
/// degenerate configs. Spacing is a fixed fraction of the smaller cell
/// dimension, so it always stays below both.
#[must_use]
pub fn spatial_grid(config: &GridConfiguration, viewport: &Viewport) -> SpatialGrid {
    let (base_w, base_h) = config.base_cell_size();
    let factor = responsive_factor(viewport);
    let cell_width = base_w * factor;
    let cell_height = base_h * factor;
    SpatialGrid {
        cell_width,
        cell_height,
        total_width: config.width,
        total_height: config.height,
        spacing: cell_width.min(cell_height) * SPACING_RATIO,
        layout: config.layout,
    }
}

/// Growth factor in `[1, 2]`, non-decreasing in viewport width.
pub(crate) fn responsive_factor(viewport: &Viewport) -> f64 {
    let width = if viewport.width.is_finite() {
        viewport.width.abs()
    } else {
        REFERENCE_VIEWPORT_WIDTH
    };
    (width / REFERENCE_VIEWPORT_WIDTH).clamp(1.0, 2.0)
}

/// Deterministic placement of one section under a configuration.
///
/// Offsets are relative to the layout center. Circular layouts add an
/// `angle` in `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialCoordinates {
    /// Column index of the assigned cell.
    pub grid_x: u32,
    /// Row index of the assigned cell.
    pub grid_y: u32,
    /// World-unit x offset of the placement anchor from the layout center.
    pub offset_x: f64,
    /// World-unit y offset of the placement anchor from the layout center.
    pub offset_y: f64,
    /// Angular placement in degrees for circular layouts.
    pub angle: Option<f64>,
}

/// Places a named section under the given configuration.
///
/// Deterministic: the same name and configuration always produce the same
/// coordinates. Canonical sections occupy pairwise-distinct cells whenever
/// the grid has at least as many cells as sections. Circular layouts keep
/// the cell assignment and add an evenly spaced angle with the anchor on
/// the circle.
#[must_use]
pub fn section_grid_position(name: &str, config: &GridConfiguration) -> SpatialCoordinates {
    let cells = config.cell_count();
    let idx = section_index(name) as u64 % cells;
    let cols = u64::from(config.cols.max(1));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cell indices are bounded by the u32 row/column counts"
    )]
    let (grid_x, grid_y) = ((idx % cols) as u32, (idx / cols) as u32);

    let (w, h) = config.sanitized_size();
    let (cell_w, cell_h) = config.base_cell_size();

    match config.layout {
        GridLayout::Grid => SpatialCoordinates {
            grid_x,
            grid_y,
            offset_x: (f64::from(grid_x) + 0.5) * cell_w - w * 0.5,
            offset_y: (f64::from(grid_y) + 0.5) * cell_h - h * 0.5,
            angle: None,
        },
        GridLayout::Circular => {
            let count = crate::sections::Section::ALL.len() as u64;
            let slot = idx % count;
            let angle = 360.0 * (slot as f64) / (count as f64);
            let radius = (w.min(h) * 0.5) * CIRCULAR_RADIUS_RATIO;
            let radians = angle.to_radians();
            SpatialCoordinates {
                grid_x,
                grid_y,
                offset_x: radius * libm::cos(radians),
                offset_y: radius * libm::sin(radians),
                angle: Some(angle),
            }
        }
    }
}

/// Spacing between placed sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpacing {
    /// Horizontal gap between adjacent sections, in world units.
    pub horizontal: f64,
    /// Vertical gap between adjacent sections, in world units.
    pub vertical: f64,
    /// Inner padding applied within each cell, in world units.
    pub padding: f64,
}

/// Derives section spacing from the resolved grid.
///
/// All three values are strictly positive and strictly below the
/// corresponding cell dimension.
#[must_use]
pub fn section_spacing(config: &GridConfiguration, viewport: &Viewport) -> SectionSpacing {
    let grid = spatial_grid(config, viewport);
    SectionSpacing {
        horizontal: grid.cell_width * 0.08,
        vertical: grid.cell_height * 0.08,
        padding: grid.cell_width.min(grid.cell_height) * 0.04,
    }
}
