// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart data records.
//!
//! A [`SeriesItem`] is the single record type that flows through data input, selection state
//! and output events. Host payloads are checked with [`SeriesItem::validate`] before they touch
//! selection state.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::BezPath;

/// A single data point.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeriesItem {
    /// Item name; unique within its group.
    pub name: String,
    /// Item value. Non-finite values are replaced by `0.0` when data is loaded.
    pub value: f64,
    /// Display label; falls back to `name`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    /// Name of the group (ring) the item belongs to.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub series: Option<String>,
}

impl SeriesItem {
    /// Creates an item with no label and no group.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            label: None,
            series: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the owning group name.
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Returns the label shown in legends and slice labels.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Returns the identity key used for active-entry membership.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            name: self.name.clone(),
            value_bits: self.value.to_bits(),
            series: self.series.clone(),
        }
    }

    /// Returns `true` if `self` and `other` refer to the same slice: same name, same group.
    pub fn same_slice(&self, other: &Self) -> bool {
        self.name == other.name && self.series == other.series
    }

    /// Checks that a host-supplied payload is usable as an interaction target.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        if !self.value.is_finite() {
            return Err(ItemError::NonFiniteValue {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn sanitize(&mut self) {
        if !self.value.is_finite() {
            log::warn!("item {:?} has non-finite value; using 0", self.name);
            self.value = 0.0;
        }
    }
}

/// Identity of an active entry: `(name, value, series)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryKey {
    name: String,
    value_bits: u64,
    series: Option<String>,
}

impl EntryKey {
    /// The item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item value.
    pub fn value(&self) -> f64 {
        f64::from_bits(self.value_bits)
    }

    /// The owning group name.
    pub fn series(&self) -> Option<&str> {
        self.series.as_deref()
    }
}

/// One ring of a nested pie chart.
///
/// A radius ratio `<= 1` is a fraction of the available radius; a ratio `> 1` is an absolute
/// radius in scene units. Missing ratios count as `0`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NestedPieSeries {
    /// Group name; stamped onto each item's `series` when missing.
    pub name: String,
    /// Items in slice order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub series: Vec<SeriesItem>,
    /// Inner radius ratio.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub inner_radius_ratio: Option<f64>,
    /// Outer radius ratio.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub outer_radius_ratio: Option<f64>,
}

impl NestedPieSeries {
    /// Creates a ring from its name, radius ratios and items.
    pub fn new(
        name: impl Into<String>,
        inner_radius_ratio: f64,
        outer_radius_ratio: f64,
        series: Vec<SeriesItem>,
    ) -> Self {
        Self {
            name: name.into(),
            series,
            inner_radius_ratio: Some(inner_radius_ratio),
            outer_radius_ratio: Some(outer_radius_ratio),
        }
    }

    /// Fixes up loaded data: non-finite values become `0`, and items without a group get this
    /// ring's name.
    pub(crate) fn sanitize(&mut self) {
        for item in &mut self.series {
            item.sanitize();
            if item.series.is_none() {
                item.series = Some(self.name.clone());
            }
        }
    }
}

/// A geo map region: a data item plus its outline, already projected into local map
/// coordinates centered on the origin.
#[derive(Clone, Debug)]
pub struct GeoRegion {
    /// The region's data record.
    pub item: SeriesItem,
    /// Projected outline.
    pub outline: BezPath,
}

impl GeoRegion {
    /// Creates a region.
    pub fn new(item: SeriesItem, outline: BezPath) -> Self {
        Self { item, outline }
    }
}

/// Errors for host-supplied interaction payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemError {
    /// The payload has an empty name.
    EmptyName,
    /// The payload value is NaN or infinite.
    NonFiniteValue {
        /// Name of the offending payload.
        name: String,
    },
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("item name is empty"),
            Self::NonFiniteValue { name } => write!(f, "item {name:?} has a non-finite value"),
        }
    }
}

impl core::error::Error for ItemError {}
