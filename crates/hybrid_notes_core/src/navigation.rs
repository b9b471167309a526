//! Selection movement over the outline.
//!
//! # Responsibility
//! - Compute the next selected entry for directional and structural moves.
//!
//! # Invariants
//! - Directional moves (`Up`, `Down`, `First`, `Last`) only land on entries
//!   in the current view (filtered, then visibility-checked).
//! - Structural moves (`Parent`, `Child`) scan the full sequence.
//! - `Up`/`Down` wrap around; with no usable selection, `Down` lands on the
//!   first view entry and `Up` on the last. A selection that exists but is
//!   outside the view counts as no selection.
//! - A selected id missing from the sequence makes every move a no-op.
//! - An empty view makes every move a no-op.

use crate::model::entry::{Entry, EntryId};
use crate::tree::{has_children, parent_index};
use serde::{Deserialize, Serialize};

/// Navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Up,
    Down,
    First,
    Last,
    Parent,
    Child,
}

/// Returns the entry to select next, or `None` when selection stays as is.
///
/// `view` holds indices into `entries` in display order.
pub fn navigate(
    entries: &[Entry],
    view: &[usize],
    selected: Option<EntryId>,
    direction: NavDirection,
) -> Option<EntryId> {
    if view.is_empty() {
        return None;
    }

    if let Some(id) = selected {
        if !entries.iter().any(|entry| entry.id == id) {
            return None;
        }
    }

    let last = view.len() - 1;
    let current = selected.and_then(|id| {
        view.iter()
            .position(|index| entries.get(*index).is_some_and(|entry| entry.id == id))
    });

    let target = match direction {
        NavDirection::Up => match current {
            Some(position) if position > 0 => position - 1,
            _ => last,
        },
        NavDirection::Down => match current {
            Some(position) if position < last => position + 1,
            _ => 0,
        },
        NavDirection::First => 0,
        NavDirection::Last => last,
        NavDirection::Parent => return parent_of(entries, selected?),
        NavDirection::Child => return first_child_of(entries, selected?),
    };

    view.get(target)
        .and_then(|index| entries.get(*index))
        .map(|entry| entry.id)
}

fn parent_of(entries: &[Entry], selected: EntryId) -> Option<EntryId> {
    let index = entries.iter().position(|entry| entry.id == selected)?;
    parent_index(entries, index).map(|parent| entries[parent].id)
}

fn first_child_of(entries: &[Entry], selected: EntryId) -> Option<EntryId> {
    let index = entries.iter().position(|entry| entry.id == selected)?;
    if has_children(entries, index) {
        return Some(entries[index + 1].id);
    }
    None
}
