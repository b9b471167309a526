//! Chat input classification.
//!
//! # Responsibility
//! - Split one raw input line into a type tag and content.
//!
//! # Invariants
//! - Input is trimmed before matching.
//! - Blank input yields `None`; callers never create an entry for it.
//! - Without a `type::` prefix the type is `DEFAULT_ENTRY_TYPE`.

use crate::model::entry::DEFAULT_ENTRY_TYPE;
use once_cell::sync::Lazy;
use regex::Regex;

// `(?s)` lets the remainder span newlines; the tag itself is ASCII word chars.
static TYPE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([A-Za-z0-9_]+)::\s*(.*)").expect("valid type prefix regex"));

/// Result of classifying one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub entry_type: String,
    pub content: String,
}

/// Classifies raw chat input into `(type, content)`.
///
/// Returns `None` when the trimmed input is empty.
///
/// An explicit prefix with an empty remainder (`"ctx::"`) keeps the prefix
/// type and falls back to the full trimmed text as content.
pub fn parse_entry_input(raw: &str) -> Option<ParsedInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = TYPE_PREFIX_RE.captures(trimmed) {
        let entry_type = caps.get(1).map(|m| m.as_str()).unwrap_or(DEFAULT_ENTRY_TYPE);
        let remainder = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let content = if remainder.is_empty() {
            trimmed
        } else {
            remainder
        };
        return Some(ParsedInput {
            entry_type: entry_type.to_string(),
            content: content.to_string(),
        });
    }

    Some(ParsedInput {
        entry_type: DEFAULT_ENTRY_TYPE.to_string(),
        content: trimmed.to_string(),
    })
}
