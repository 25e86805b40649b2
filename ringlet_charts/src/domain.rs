// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical domain extraction.
//!
//! The domain is the ordered set of distinct display labels. It seeds the ordinal color scale,
//! so the order matters: appending data must not reshuffle existing colors.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::model::{NestedPieSeries, SeriesItem};

/// Collects distinct display labels in first-seen order.
pub fn domain_of<'a>(items: impl IntoIterator<Item = &'a SeriesItem>) -> Vec<String> {
    let mut domain: Vec<String> = Vec::new();
    for item in items {
        let label = item.display_label();
        if !domain.iter().any(|d| d == label) {
            domain.push(String::from(label));
        }
    }
    domain
}

/// Collects distinct labels across rings: rings in input order, items in order within a ring.
pub fn nested_domain(series: &[NestedPieSeries]) -> Vec<String> {
    domain_of(series.iter().flat_map(|group| group.series.iter()))
}
