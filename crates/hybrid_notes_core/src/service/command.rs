//! Semantic command surface.
//!
//! Key bindings live in the UI layer; it maps its input events onto these
//! commands and hands them to [`OutlineService::dispatch`].
//!
//! [`OutlineService::dispatch`]: super::outline_service::OutlineService::dispatch

use crate::exchange::export::ExportArtifact;
use crate::model::entry::EntryId;
use crate::navigation::NavDirection;
use crate::repo::entry_store::MoveDirection;

/// One user-level outline command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Classifies and inserts one line of chat input.
    AddEntry(String),
    /// `None` clears the selection (caret at bottom of list).
    SelectEntry(Option<EntryId>),
    Navigate(NavDirection),
    DeleteSelected,
    DuplicateSelected,
    MoveSelected(MoveDirection),
    SetIndent(i32),
    ToggleCollapseSelected,
    ExpandAll,
    CollapseAll,
    SetFilter {
        query: Option<String>,
        type_tag: Option<String>,
    },
    ClearFilter,
    /// Toggles one of the nine quick type-filter slots (1-based).
    ToggleQuickTypeFilter(usize),
    EditSelected(String),
    ToggleDetails,
    ExportAll,
    LoadDemo,
    CopySelectedContent,
}

/// Observable result of a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Nothing changed (blank input, stale selection, boundary move).
    Noop,
    Applied,
    /// A new entry was created and selected.
    Created(EntryId),
    /// Export payload for the download collaborator.
    Exported(ExportArtifact),
    /// Text for the clipboard collaborator.
    Copied(String),
}

impl CommandOutput {
    pub(crate) fn from_applied(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Noop
        }
    }
}
