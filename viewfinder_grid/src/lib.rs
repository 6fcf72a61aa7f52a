// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Grid: spatial layout of portfolio sections.
//!
//! The canvas arranges a fixed set of named sections spatially, either on
//! a rows-by-columns grid or on a circle around the canvas center. This
//! crate resolves those arrangements:
//!
//! - [`spatial_grid`] — cell metrics for a configuration under a viewport.
//! - [`section_grid_position`] — deterministic coordinates for a named
//!   section (grid cell, center-relative offsets, circular angle).
//! - [`section_spacing`] — gaps and padding derived from cell size.
//! - [`validate_layout`] — structural validation: overflow, cell-size
//!   floor, degenerate dimensions, duplicate names.
//! - [`optimize_placement`] — priority scoring for placements.
//! - [`responsive_scaling`] — breakpoint scaling with accessibility
//!   floors (44 px touch targets, 14 px type).
//!
//! Nothing is cached: every function recomputes from its arguments, and a
//! caller that resolves a section target once per navigation event can
//! cache the result itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use viewfinder_grid::{GridConfiguration, section_grid_position};
//!
//! let config = GridConfiguration::grid(3, 2, 300.0, 400.0);
//! let capture = section_grid_position("capture", &config);
//! // Same name, same config: the placement is reproducible.
//! assert_eq!(capture, section_grid_position("capture", &config));
//! ```
//!
//! This crate is `no_std` (with `alloc` for validation output).

#![no_std]

extern crate alloc;

mod layout;
mod placement;
mod responsive;
mod sections;
mod validate;

pub use layout::{
    GridConfiguration, GridLayout, SectionSpacing, SpatialCoordinates, SpatialGrid, Viewport,
    section_grid_position, section_spacing, spatial_grid,
};
pub use placement::{SectionPlacement, optimize_placement};
pub use responsive::{ResponsiveScaling, responsive_scaling};
pub use sections::{Section, section_index};
pub use validate::{LayoutError, LayoutValidation, validate_layout};
