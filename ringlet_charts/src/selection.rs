// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active entry tracking.
//!
//! Legend and slice gestures activate or deactivate entries. A slice gesture targets records
//! matched by name and group; a payload with no group matches the name in every ring. A legend
//! gesture targets a label, and every record showing that label becomes (in)active, across all
//! rings.
//!
//! Payloads are always resolved against the chart's own records, so the active set only ever
//! holds canonical data items, never raw gesture payloads.
//!
//! [`ActiveEntries`] is immutable. Every change builds a new list, and snapshots handed out in
//! events stay valid.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::event::ChartEvent;
use crate::model::{EntryKey, SeriesItem};

/// An ordered, duplicate-free list of active items, most recently activated first.
///
/// Clones share storage.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveEntries {
    items: Arc<[SeriesItem]>,
}

impl Default for ActiveEntries {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl ActiveEntries {
    /// Builds a set from `items`, dropping later duplicates by key.
    pub fn from_items(items: impl IntoIterator<Item = SeriesItem>) -> Self {
        let mut out: Vec<SeriesItem> = Vec::new();
        for item in items {
            let key = item.key();
            if !out.iter().any(|i| i.key() == key) {
                out.push(item);
            }
        }
        Self {
            items: Arc::from(out),
        }
    }

    /// Number of active items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is active.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active items, most recent first.
    pub fn as_slice(&self) -> &[SeriesItem] {
        &self.items
    }

    /// Iterates active items, most recent first.
    pub fn iter(&self) -> core::slice::Iter<'_, SeriesItem> {
        self.items.iter()
    }

    /// Returns `true` if an item with `key` is active.
    pub fn contains_key(&self, key: &EntryKey) -> bool {
        self.items.iter().any(|i| i.key() == *key)
    }

    /// Returns `true` if `item` (by key) is active.
    pub fn contains(&self, item: &SeriesItem) -> bool {
        self.contains_key(&item.key())
    }

    /// Returns a new set with `fresh` in front of the current entries.
    fn prepended(&self, fresh: &[SeriesItem]) -> Self {
        let mut out = Vec::with_capacity(fresh.len() + self.items.len());
        out.extend_from_slice(fresh);
        out.extend_from_slice(&self.items);
        Self {
            items: Arc::from(out),
        }
    }

    /// Returns a new set without the entries matching `remove`.
    fn without(&self, mut remove: impl FnMut(&SeriesItem) -> bool) -> Self {
        let kept: Vec<SeriesItem> = self
            .items
            .iter()
            .filter(|i| !remove(*i))
            .cloned()
            .collect();
        Self {
            items: Arc::from(kept),
        }
    }
}

impl<'a> IntoIterator for &'a ActiveEntries {
    type Item = &'a SeriesItem;
    type IntoIter = core::slice::Iter<'a, SeriesItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Owns the active set of one chart instance and applies gestures to it.
///
/// Deactivating what was just activated restores the previous set, provided none of the
/// matched records was already active. Deactivation removes every match, so a record that
/// was active before the pair is dropped too.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    entries: ActiveEntries,
}

impl SelectionTracker {
    /// Creates a tracker with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current active set.
    pub fn entries(&self) -> &ActiveEntries {
        &self.entries
    }

    /// Replaces the active set, e.g. when the host restores a previous selection.
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = SeriesItem>) {
        self.entries = ActiveEntries::from_items(entries);
    }

    /// Clears the active set. Returns `true` if anything was active.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries = ActiveEntries::default();
        had_entries
    }

    /// Activates the records that `item` refers to.
    ///
    /// `records` are the chart's data items. `origin_group`, when given, names the ring the
    /// gesture came from and overrides the payload's `series`. With `from_legend`, `item.name`
    /// is a legend label and every record displaying it is activated; otherwise records are
    /// matched by name and group, or by name alone when the payload carries no group.
    ///
    /// Matches that are already active are skipped. Returns `None` if nothing new became
    /// active.
    pub fn activate<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a SeriesItem>,
        item: &SeriesItem,
        origin_group: Option<&str>,
        from_legend: bool,
    ) -> Option<ChartEvent> {
        let value = with_origin(item, origin_group);
        let mut fresh: SmallVec<[SeriesItem; 4]> = SmallVec::new();
        for record in records {
            if !targets(record, &value, from_legend) {
                continue;
            }
            let key = record.key();
            if self.entries.contains_key(&key) || fresh.iter().any(|f| f.key() == key) {
                continue;
            }
            fresh.push(record.clone());
        }

        if fresh.is_empty() {
            log::trace!("activate {:?}: nothing new", value.name);
            return None;
        }

        self.entries = self.entries.prepended(&fresh);
        log::debug!(
            "activated {} entr{} for {:?} (legend: {from_legend}); {} active",
            fresh.len(),
            if fresh.len() == 1 { "y" } else { "ies" },
            value.name,
            self.entries.len()
        );
        Some(ChartEvent::Activate {
            value,
            entries: self.entries.clone(),
        })
    }

    /// Deactivates every active entry that `item` refers to.
    ///
    /// Matching follows [`SelectionTracker::activate`]. Returns `None` if nothing was active.
    pub fn deactivate(
        &mut self,
        item: &SeriesItem,
        origin_group: Option<&str>,
        from_legend: bool,
    ) -> Option<ChartEvent> {
        let value = with_origin(item, origin_group);
        let next = self
            .entries
            .without(|entry| targets(entry, &value, from_legend));
        if next.len() == self.entries.len() {
            log::trace!("deactivate {:?}: nothing active", value.name);
            return None;
        }

        log::debug!(
            "deactivated {} entries for {:?} (legend: {from_legend}); {} active",
            self.entries.len() - next.len(),
            value.name,
            next.len()
        );
        self.entries = next;
        Some(ChartEvent::Deactivate {
            value,
            entries: self.entries.clone(),
        })
    }
}

fn with_origin(item: &SeriesItem, origin_group: Option<&str>) -> SeriesItem {
    let mut value = item.clone();
    if let Some(group) = origin_group {
        value.series = Some(group.into());
    }
    value
}

fn targets(record: &SeriesItem, value: &SeriesItem, from_legend: bool) -> bool {
    if from_legend {
        record.display_label() == value.name
    } else if value.series.is_none() {
        record.name == value.name
    } else {
        record.same_slice(value)
    }
}
