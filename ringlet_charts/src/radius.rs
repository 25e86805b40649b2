// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring radius normalization for nested pie charts.
//!
//! Each ring carries an `(inner, outer)` ratio pair. A ratio `<= 1` is a fraction of the
//! available radius, a ratio `> 1` is an absolute radius. Normalized rings are ordered
//! outermost first so larger rings paint behind smaller ones.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::model::{NestedPieSeries, SeriesItem};

/// A normalized ring: concrete radii plus its items.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialRing {
    /// Ring (group) name.
    pub name: String,
    /// Items in slice order.
    pub series: Vec<SeriesItem>,
    /// Inner radius in scene units.
    pub inner_radius: f64,
    /// Outer radius in scene units; never less than `inner_radius`.
    pub outer_radius: f64,
    /// Whether slice labels are drawn for this ring.
    pub show_labels: bool,
}

/// Returns the radius available to the outermost ring.
///
/// With labels, a third of the shorter plot side is used so labels fit outside the rings;
/// otherwise half of it.
pub fn available_radius(plot_width: f64, plot_height: f64, labels: bool) -> f64 {
    let side = plot_width.min(plot_height).max(0.0);
    if labels { side / 3.0 } else { side / 2.0 }
}

/// Resolves one ratio against the available radius `r`.
///
/// Missing, negative and non-finite ratios resolve to `0`.
pub fn resolve_ratio(ratio: Option<f64>, r: f64) -> f64 {
    let ratio = match ratio {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    };
    if r < 1.0 || ratio > 1.0 {
        ratio
    } else {
        ratio * r
    }
}

/// Normalizes ring radii against the available radius `r` and orders rings outermost first.
///
/// If `r < 1` the chart is too small to scale against, and ratios are used as radii
/// unchanged. The sort is stable, so rings with equal outer radii keep their input order.
/// Only the first ring gets `show_labels`, and only when `labels` is set.
pub fn normalize_rings(series: &[NestedPieSeries], r: f64, labels: bool) -> Vec<RadialRing> {
    if r < 1.0 {
        log::debug!("available radius {r} < 1; using radius ratios verbatim");
    }

    let mut rings: Vec<RadialRing> = series
        .iter()
        .map(|s| {
            let outer_radius = resolve_ratio(s.outer_radius_ratio, r);
            let inner_radius = resolve_ratio(s.inner_radius_ratio, r).min(outer_radius);
            RadialRing {
                name: s.name.clone(),
                series: s.series.clone(),
                inner_radius,
                outer_radius,
                show_labels: false,
            }
        })
        .collect();

    rings.sort_by(|a, b| b.outer_radius.total_cmp(&a.outer_radius));

    if let Some(first) = rings.first_mut() {
        first.show_labels = labels;
    }
    rings
}
