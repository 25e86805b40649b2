// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events emitted to the host.

extern crate alloc;

use alloc::string::String;

use crate::model::SeriesItem;
use crate::selection::ActiveEntries;

/// What a select gesture hit.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectTarget {
    /// A slice or region.
    Item(SeriesItem),
    /// A legend label.
    Label(String),
}

/// An output event for the hosting application.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// A slice, region or legend label was clicked.
    Select(SelectTarget),
    /// Entries became active.
    Activate {
        /// The triggering payload, with its group filled in.
        value: SeriesItem,
        /// The active set after the change.
        entries: ActiveEntries,
    },
    /// Entries stopped being active.
    Deactivate {
        /// The triggering payload, with its group filled in.
        value: SeriesItem,
        /// The active set after the change.
        entries: ActiveEntries,
    },
    /// A slice was double-clicked.
    DoubleClick(SeriesItem),
}
