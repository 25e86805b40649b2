// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial and map chart presenters on top of `ringlet_core`.
//!
//! This crate turns declarative chart inputs into `ringlet_core::Mark`s:
//! - **Geometry**: ring radius normalization, pie arc layout, view layout with legends.
//! - **Interaction**: an active-entry tracker fed by legend and slice gestures, emitting typed
//!   [`ChartEvent`]s.
//! - **Presenters**: [`NestedPieChart`] and [`GeoMapChart`], both driven through
//!   [`ChartPresenter`].
//!
//! Rendering, text shaping and map projection are out of scope. Text marks store unshaped
//! strings and regions arrive pre-projected.

#![no_std]

extern crate alloc;

mod color;
mod domain;
mod event;
mod geo_map;
mod label;
mod layout;
mod legend;
mod measure;
mod model;
mod nested_pie;
#[cfg(test)]
mod nested_pie_tests;
mod pie;
mod presenter;
mod radius;
mod selection;
mod slice_mark;
mod style;
mod z_order;

pub use color::{ColorScheme, OrdinalColorScale};
pub use domain::{domain_of, nested_domain};
pub use event::{ChartEvent, SelectTarget};
pub use geo_map::{GeoMapChart, GeoMapOptions};
pub use label::{LabelFormatter, MIN_LABEL_SWEEP, SliceLabel, default_label, trim_label};
pub use layout::{ChartLayout, ChartLayoutSpec, LegendOrient, LegendPlacement, Margins, Size};
pub use legend::{LegendItem, LegendSwatches, LegendSwatchesSpec};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use model::{EntryKey, GeoRegion, ItemError, NestedPieSeries, SeriesItem};
pub use nested_pie::{LABEL_MARGINS, NestedPieChart, NestedPieOptions, PLAIN_MARGINS};
pub use pie::{PieArc, pie_arcs, point_at, to_scene_angle};
pub use presenter::{ChartPresenter, HitTarget};
pub use radius::{RadialRing, available_radius, normalize_rings, resolve_ratio};
pub use selection::{ActiveEntries, SelectionTracker};
pub use slice_mark::{SLICE_TOLERANCE, SliceMark};
pub use style::StrokeStyle;
pub use z_order::*;
