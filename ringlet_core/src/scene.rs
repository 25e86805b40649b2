// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene state and mark diffing.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to the retained mark set, produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that was not present in the previous tick.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Bounds of the new payload, if known.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or paint order changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Previous payload.
        old: Arc<MarkPayload>,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Bounds of the previous payload, if known.
        old_bounds: Option<Rect>,
        /// Bounds of the new payload, if known.
        new_bounds: Option<Rect>,
    },
    /// A mark that is no longer present.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Last paint order.
        z_index: i32,
        /// Last payload.
        old: Arc<MarkPayload>,
        /// Bounds of the last payload, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

#[derive(Clone, Debug)]
struct Retained {
    z_index: i32,
    payload: Arc<MarkPayload>,
}

/// Retained mark set.
///
/// Each [`Scene::tick`] replaces the whole set: marks missing from the new list exit.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Retained>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained payload for `id`.
    pub fn payload(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|r| &*r.payload)
    }

    /// Replaces the retained marks with `marks` and reports the differences.
    ///
    /// Enter/update diffs follow input order; exit diffs follow, ordered by id. If an id
    /// appears more than once in `marks`, the last occurrence wins. A mark whose kind changes
    /// is reported as an exit followed by an enter.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Retained> = HashMap::new();
        let mut order: Vec<MarkId> = Vec::new();
        for mark in marks {
            let retained = Retained {
                z_index: mark.z_index,
                payload: Arc::new(mark.payload),
            };
            if next.insert(mark.id, retained).is_some() {
                log::warn!("duplicate mark id {:?} in one tick; keeping the last", mark.id);
            } else {
                order.push(mark.id);
            }
        }

        let mut diffs = Vec::new();
        for id in &order {
            let new = &next[id];
            let kind = new.payload.kind();
            match self.marks.get(id) {
                None => diffs.push(enter(*id, new)),
                Some(old) if old.payload.kind() != kind => {
                    diffs.push(exit(*id, old));
                    diffs.push(enter(*id, new));
                }
                Some(old) => {
                    if old.z_index != new.z_index || old.payload != new.payload {
                        diffs.push(MarkDiff::Update {
                            id: *id,
                            kind,
                            old_z_index: old.z_index,
                            new_z_index: new.z_index,
                            old: old.payload.clone(),
                            new: new.payload.clone(),
                            old_bounds: old.payload.bounds(),
                            new_bounds: new.payload.bounds(),
                        });
                    }
                }
            }
        }

        let mut gone: Vec<MarkId> = self
            .marks
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();
        gone.sort_unstable();
        for id in gone {
            diffs.push(exit(id, &self.marks[&id]));
        }

        log::trace!("scene tick: {} marks, {} diffs", next.len(), diffs.len());
        self.marks = next;
        diffs
    }
}

fn enter(id: MarkId, new: &Retained) -> MarkDiff {
    MarkDiff::Enter {
        id,
        kind: new.payload.kind(),
        z_index: new.z_index,
        new: new.payload.clone(),
        bounds: new.payload.bounds(),
    }
}

fn exit(id: MarkId, old: &Retained) -> MarkDiff {
    MarkDiff::Exit {
        id,
        kind: old.payload.kind(),
        z_index: old.z_index,
        old: old.payload.clone(),
        bounds: old.payload.bounds(),
    }
}
