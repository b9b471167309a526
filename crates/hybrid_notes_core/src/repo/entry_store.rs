//! Entry store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered entry sequence exclusively.
//! - Provide create/insert/delete/move/update primitives.
//!
//! # Invariants
//! - Snapshots are immutable; a mutation swaps in a new `Arc` so observers
//!   can detect change with `Arc::ptr_eq`.
//! - `revision` increases by one per applied mutation and never otherwise.
//! - Delete removes exactly one entry; descendants stay in place.

use crate::model::entry::{Entry, EntryId, MAX_INDENT};
use std::sync::Arc;

/// Direction for raw-sequence moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Storage contract for the outline sequence.
///
/// Boolean/`Option` returns report whether the mutation was applied.
pub trait EntryStore {
    /// Returns the current immutable sequence.
    fn snapshot(&self) -> Arc<Vec<Entry>>;
    /// Returns the number of applied mutations so far.
    fn revision(&self) -> u64;
    fn position(&self, id: EntryId) -> Option<usize>;
    fn get(&self, id: EntryId) -> Option<Entry>;
    /// Inserts a new entry right after `after`, or appends when `after` is
    /// `None` or unknown. Returns the new id.
    fn add(
        &mut self,
        entry_type: &str,
        content: &str,
        indent: u8,
        after: Option<EntryId>,
    ) -> EntryId;
    fn delete(&mut self, id: EntryId) -> bool;
    fn duplicate(&mut self, id: EntryId) -> Option<EntryId>;
    fn move_entry(&mut self, id: EntryId, direction: MoveDirection) -> bool;
    /// Shifts indent by `delta`, clamped to `0..=MAX_INDENT`.
    fn set_indent(&mut self, id: EntryId, delta: i32) -> bool;
    fn toggle_collapse(&mut self, id: EntryId) -> bool;
    /// Sets every entry's collapse flag uniformly.
    fn set_all_collapsed(&mut self, collapsed: bool);
    fn update(&mut self, id: EntryId, content: &str) -> bool;
    /// Replaces the whole sequence, e.g. after an import.
    fn replace_all(&mut self, entries: Vec<Entry>);
}

/// Process-local entry store backed by a shared immutable vector.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Arc<Vec<Entry>>,
    revision: u64,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries` in order.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::new(entries),
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn commit(&mut self, next: Vec<Entry>) {
        self.entries = Arc::new(next);
        self.revision += 1;
    }

    fn edit_one(&mut self, id: EntryId, apply: impl FnOnce(&mut Entry) -> bool) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut next = self.entries.as_ref().clone();
        if !apply(&mut next[index]) {
            return false;
        }
        self.commit(next);
        true
    }
}

impl EntryStore for MemoryEntryStore {
    fn snapshot(&self) -> Arc<Vec<Entry>> {
        Arc::clone(&self.entries)
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn get(&self, id: EntryId) -> Option<Entry> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }

    fn add(
        &mut self,
        entry_type: &str,
        content: &str,
        indent: u8,
        after: Option<EntryId>,
    ) -> EntryId {
        let mut entry = Entry::new(entry_type, content, indent);
        let anchor = after.and_then(|id| self.position(id).map(|index| (id, index)));
        entry.parent_id = anchor.map(|(id, _)| id);
        let new_id = entry.id;

        let mut next = self.entries.as_ref().clone();
        match anchor {
            Some((_, index)) => next.insert(index + 1, entry),
            None => next.push(entry),
        }
        self.commit(next);
        new_id
    }

    fn delete(&mut self, id: EntryId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut next = self.entries.as_ref().clone();
        next.remove(index);
        self.commit(next);
        true
    }

    fn duplicate(&mut self, id: EntryId) -> Option<EntryId> {
        let index = self.position(id)?;
        let copy = Entry::duplicate_of(&self.entries[index]);
        let new_id = copy.id;
        let mut next = self.entries.as_ref().clone();
        next.insert(index + 1, copy);
        self.commit(next);
        Some(new_id)
    }

    fn move_entry(&mut self, id: EntryId, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|next| *next < self.entries.len()),
        };
        let Some(target) = target else {
            return false;
        };
        let mut next = self.entries.as_ref().clone();
        next.swap(index, target);
        self.commit(next);
        true
    }

    fn set_indent(&mut self, id: EntryId, delta: i32) -> bool {
        self.edit_one(id, |entry| {
            let shifted = i32::from(entry.indent)
                .saturating_add(delta)
                .clamp(0, i32::from(MAX_INDENT));
            // Clamped into u8 range above.
            let shifted = shifted as u8;
            if shifted == entry.indent {
                return false;
            }
            entry.indent = shifted;
            true
        })
    }

    fn toggle_collapse(&mut self, id: EntryId) -> bool {
        self.edit_one(id, |entry| {
            entry.is_collapsed = Some(!entry.collapsed());
            true
        })
    }

    fn set_all_collapsed(&mut self, collapsed: bool) {
        let next = self
            .entries
            .iter()
            .map(|entry| Entry {
                is_collapsed: Some(collapsed),
                ..entry.clone()
            })
            .collect();
        self.commit(next);
    }

    fn update(&mut self, id: EntryId, content: &str) -> bool {
        self.edit_one(id, |entry| {
            entry.touch(content);
            true
        })
    }

    fn replace_all(&mut self, entries: Vec<Entry>) {
        self.commit(entries);
    }
}
