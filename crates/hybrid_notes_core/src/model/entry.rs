//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical outline record and its export wire shape.
//! - Provide constructors for fresh, duplicated and imported entries.
//!
//! # Invariants
//! - `id` is generated once and never reused for another entry.
//! - `indent` stays within `0..=MAX_INDENT` for entries created here.
//! - `parent_id` is provenance only; it is never repaired after edits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one outline entry.
pub type EntryId = Uuid;

/// Type tag applied when input carries no `type::` prefix.
pub const DEFAULT_ENTRY_TYPE: &str = "log";

/// Deepest indent level reachable through indent commands.
pub const MAX_INDENT: u8 = 6;

/// Suffix appended to the content of a duplicated entry.
pub const COPY_SUFFIX: &str = " (copy)";

/// One line of the outline.
///
/// Serialized with camelCase keys to match the export document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    /// Text body, may span several lines.
    pub content: String,
    /// Older exports call this field `timestamp`.
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Depth in the implicit tree; 0 is root level.
    pub indent: u8,
    /// Selection at creation time. Not authoritative for structure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntryId>,
    /// Free-form category tag such as `log` or `ctx`.
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
}

impl Entry {
    /// Creates an entry with a generated id and the current timestamp.
    ///
    /// `indent` is clamped to `MAX_INDENT`.
    pub fn new(entry_type: impl Into<String>, content: impl Into<String>, indent: u8) -> Self {
        Self::with_created_at(entry_type, content, indent, Utc::now())
    }

    /// Creates an entry with a caller-provided creation time.
    ///
    /// Used by import paths where the document carries its own timestamp.
    pub fn with_created_at(
        entry_type: impl Into<String>,
        content: impl Into<String>,
        indent: u8,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            created_at,
            updated_at: None,
            indent: indent.min(MAX_INDENT),
            parent_id: None,
            entry_type: entry_type.into(),
            is_collapsed: None,
        }
    }

    /// Clones `source` under a new id and fresh timestamp, marking the copy
    /// in its content.
    pub fn duplicate_of(source: &Entry) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: format!("{}{COPY_SUFFIX}", source.content),
            created_at: Utc::now(),
            updated_at: None,
            ..source.clone()
        }
    }

    /// Returns whether descendants of this entry are hidden.
    pub fn collapsed(&self) -> bool {
        self.is_collapsed.unwrap_or(false)
    }

    /// Replaces content and stamps `updated_at`.
    pub fn touch(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Some(Utc::now());
    }

    /// Returns whether this entry carries the implicit default type.
    pub fn is_default_type(&self) -> bool {
        self.entry_type == DEFAULT_ENTRY_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, COPY_SUFFIX, MAX_INDENT};

    #[test]
    fn new_clamps_indent_to_max() {
        let entry = Entry::new("log", "deep", 42);
        assert_eq!(entry.indent, MAX_INDENT);
    }

    #[test]
    fn duplicate_keeps_shape_but_not_identity() {
        let mut source = Entry::new("ctx", "hello", 2);
        source.is_collapsed = Some(true);

        let copy = Entry::duplicate_of(&source);
        assert_ne!(copy.id, source.id);
        assert_eq!(copy.content, format!("hello{COPY_SUFFIX}"));
        assert_eq!(copy.entry_type, "ctx");
        assert_eq!(copy.indent, 2);
        assert_eq!(copy.is_collapsed, Some(true));
        assert!(copy.created_at >= source.created_at);
    }
}
