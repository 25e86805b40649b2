// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `ringlet_core` marks carry an explicit `z_index` for render ordering. Renderers should sort
//! by `(z_index, MarkId)` so ties break deterministically.
//!
//! Rings of a nested pie share [`SERIES_FILL`] and rely on mark order within it: outer rings
//! get lower ids than inner rings, so inner rings paint on top.

/// Map region fills.
pub const REGION_FILL: i32 = -10;

/// Pie/donut slices.
pub const SERIES_FILL: i32 = 0;
/// Leader lines from slices to their labels.
pub const LABEL_LINES: i32 = 30;
/// Slice labels.
pub const SERIES_LABELS: i32 = 40;

/// Legend title.
pub const LEGEND_TITLE: i32 = 55;
/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
