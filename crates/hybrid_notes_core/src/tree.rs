//! Implicit tree structure over the flat entry sequence.
//!
//! # Responsibility
//! - Derive children, parents and visibility from order plus `indent`.
//!
//! # Invariants
//! - A node's children are the maximal run of following entries with a
//!   strictly greater indent; indent jumps of any size count as children.
//! - Visibility is recomputed from the current sequence on every call.
//! - Out-of-range indices are treated as "no such entry".

use crate::model::entry::Entry;

/// Returns whether the entry at `index` is directly followed by a deeper one.
pub fn has_children(entries: &[Entry], index: usize) -> bool {
    match (entries.get(index), entries.get(index + 1)) {
        (Some(current), Some(next)) => next.indent > current.indent,
        _ => false,
    }
}

/// Returns whether no ancestor of the entry at `index` is collapsed.
///
/// Walks backward keeping a ceiling that starts at the entry's own indent;
/// every earlier entry strictly below the ceiling is an ancestor.
pub fn is_visible(entries: &[Entry], index: usize) -> bool {
    let Some(entry) = entries.get(index) else {
        return false;
    };
    let mut ceiling = entry.indent;
    for candidate in entries[..index].iter().rev() {
        if candidate.indent < ceiling {
            if candidate.collapsed() {
                return false;
            }
            ceiling = candidate.indent;
        }
        if ceiling == 0 {
            break;
        }
    }
    true
}

/// Returns the index of the nearest preceding entry with a smaller indent.
pub fn parent_index(entries: &[Entry], index: usize) -> Option<usize> {
    let entry = entries.get(index)?;
    entries[..index]
        .iter()
        .rposition(|candidate| candidate.indent < entry.indent)
}

/// Returns the exclusive end of the subtree rooted at `index`.
///
/// For an out-of-range index this is `entries.len()`.
pub fn subtree_end(entries: &[Entry], index: usize) -> usize {
    let Some(entry) = entries.get(index) else {
        return entries.len();
    };
    entries[index + 1..]
        .iter()
        .position(|candidate| candidate.indent <= entry.indent)
        .map(|offset| index + 1 + offset)
        .unwrap_or(entries.len())
}

/// Computes visibility for every entry in one forward pass.
///
/// Equivalent to calling [`is_visible`] for each index.
pub fn visibility_mask(entries: &[Entry]) -> Vec<bool> {
    // (indent, hides_descendants) for the current ancestor chain.
    let mut chain: Vec<(u8, bool)> = Vec::new();
    let mut mask = Vec::with_capacity(entries.len());
    for entry in entries {
        while chain
            .last()
            .is_some_and(|(indent, _)| *indent >= entry.indent)
        {
            chain.pop();
        }
        let hidden = chain.last().is_some_and(|(_, hides)| *hides);
        mask.push(!hidden);
        chain.push((entry.indent, hidden || entry.collapsed()));
    }
    mask
}

/// Keeps only the visible indices from `candidates`, preserving order.
///
/// Candidates index into the full sequence, so a filtered view keeps the
/// collapse relationships of entries it filtered out.
pub fn visible_indices(
    entries: &[Entry],
    candidates: impl IntoIterator<Item = usize>,
) -> Vec<usize> {
    let mask = visibility_mask(entries);
    candidates
        .into_iter()
        .filter(|index| mask.get(*index).copied().unwrap_or(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_visible, visibility_mask};
    use crate::model::entry::Entry;

    fn outline(shape: &[(u8, bool)]) -> Vec<Entry> {
        shape
            .iter()
            .enumerate()
            .map(|(i, (indent, collapsed))| {
                let mut entry = Entry::new("log", format!("e{i}"), *indent);
                entry.is_collapsed = Some(*collapsed);
                entry
            })
            .collect()
    }

    #[test]
    fn mask_matches_backward_walk() {
        let shapes: Vec<Vec<(u8, bool)>> = vec![
            vec![(0, true), (1, false), (2, false), (0, false), (1, false)],
            vec![(0, false), (3, true), (1, false), (2, false), (5, false)],
            vec![(2, true), (0, false), (1, true), (1, false), (3, false)],
            vec![(0, false), (1, true), (2, true), (3, false), (1, false), (2, false)],
        ];
        for shape in shapes {
            let entries = outline(&shape);
            let expected: Vec<bool> = (0..entries.len())
                .map(|index| is_visible(&entries, index))
                .collect();
            assert_eq!(visibility_mask(&entries), expected, "shape {shape:?}");
        }
    }
}
