//! Substring and type-tag filtering.
//!
//! # Responsibility
//! - Match entries by case-insensitive substring over content or type.
//! - Narrow matches to one exact type tag.
//!
//! # Invariants
//! - Query and type constraints intersect.
//! - A blank query or type tag is treated as absent.
//! - Results keep sequence order.

use crate::model::entry::Entry;

/// Type tags bound to the nine quick-filter slots, in slot order.
pub const QUICK_TYPE_FILTERS: [&str; 9] = [
    "synthesis",
    "resistance",
    "heresy",
    "debug",
    "ritual",
    "bridge",
    "meta",
    "log",
    "ctx",
];

/// Active search constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring matched against content or type.
    pub query: Option<String>,
    /// Exact type tag.
    pub type_tag: Option<String>,
}

impl EntryFilter {
    pub fn new(query: Option<String>, type_tag: Option<String>) -> Self {
        Self {
            query: query.filter(|value| !value.is_empty()),
            type_tag: type_tag.filter(|value| !value.is_empty()),
        }
    }

    /// Returns whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.type_tag.is_none()
    }

    /// Toggles the quick-filter slot `slot` (1-based).
    ///
    /// Selecting the active slot again clears the type tag. Returns `false`
    /// for slots outside `1..=9`.
    pub fn toggle_quick_type(&mut self, slot: usize) -> bool {
        let Some(tag) = slot
            .checked_sub(1)
            .and_then(|index| QUICK_TYPE_FILTERS.get(index))
        else {
            return false;
        };
        if self.type_tag.as_deref() == Some(*tag) {
            self.type_tag = None;
        } else {
            self.type_tag = Some((*tag).to_string());
        }
        true
    }

    /// Returns whether `entry` satisfies every set constraint.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(query) = self.query.as_deref().filter(|value| !value.is_empty()) {
            let needle = query.to_lowercase();
            let hit = entry.content.to_lowercase().contains(&needle)
                || entry.entry_type.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(tag) = self.type_tag.as_deref().filter(|value| !value.is_empty()) {
            if entry.entry_type != tag {
                return false;
            }
        }
        true
    }
}

/// Returns indices of matching entries in sequence order.
pub fn filter_indices(entries: &[Entry], filter: &EntryFilter) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(index, _)| index)
        .collect()
}

/// Returns matching entries in sequence order.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}
