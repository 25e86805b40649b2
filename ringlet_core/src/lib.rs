// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal mark model and scene diffing for Ringlet charts.
//!
//! Chart code produces a flat list of [`Mark`]s every time its inputs change. Each mark has a
//! stable [`MarkId`], so a [`Scene`] can compare the new list against the previous one and
//! report what entered, changed, or exited. Renderers apply those [`MarkDiff`]s instead of
//! repainting everything.
//!
//! Marks are fully resolved: geometry and paint are concrete values. Scales, layout and
//! interaction state live in `ringlet_charts`.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor,
    TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
