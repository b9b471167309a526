//! Outline session service.
//!
//! # Responsibility
//! - Hold selection, filter and display state around one entry store.
//! - Implement every user command as a named operation.
//! - Build the row projection the UI renders.
//!
//! # Invariants
//! - The store is the only mutator of entries.
//! - Stale selections make selection-based commands no-ops.
//! - Views are recomputed from the current snapshot on every call.

use super::command::{Command, CommandOutput};
use crate::exchange::demo::demo_entries;
use crate::exchange::export::{export_artifact, ExportArtifact};
use crate::exchange::import::import_document_str;
use crate::exchange::ExchangeResult;
use crate::model::entry::{Entry, EntryId};
use crate::model::palette::{tone_for_type, TypeTone};
use crate::navigation::{navigate, NavDirection};
use crate::parser::parse_entry_input;
use crate::repo::entry_store::{EntryStore, MoveDirection};
use crate::search::filter::{filter_indices, EntryFilter};
use crate::tree::{has_children, visible_indices};
use log::{debug, info};
use std::sync::Arc;

const APPEND_INDICATOR: &str = "Appending to bottom";
const SAME_LEVEL_INDICATOR: &str = "├─ Same level as selected entry";

/// One rendered line of the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub entry: Entry,
    /// Position in the full sequence.
    pub index: usize,
    pub has_children: bool,
    pub is_selected: bool,
    pub tone: TypeTone,
    /// Content as shown, with the type prefix in details mode.
    pub display: String,
}

/// Outline session facade over an entry store.
pub struct OutlineService<S: EntryStore> {
    store: S,
    selected: Option<EntryId>,
    filter: EntryFilter,
    show_details: bool,
}

impl<S: EntryStore> OutlineService<S> {
    /// Creates a session with no selection, no filter and details hidden.
    pub fn new(store: S) -> Self {
        Self {
            store,
            selected: None,
            filter: EntryFilter::default(),
            show_details: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current full sequence.
    pub fn entries(&self) -> Arc<Vec<Entry>> {
        self.store.snapshot()
    }

    /// Returns the selected id, which may be stale.
    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    /// Returns the selected entry if it still exists.
    pub fn selected_entry(&self) -> Option<Entry> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// Selects `id`, or clears the selection with `None`.
    ///
    /// Unknown ids are ignored.
    pub fn select_entry(&mut self, id: Option<EntryId>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) if self.store.position(id).is_some() => {
                self.selected = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    /// Indent for the next added entry: the selected entry's level, else 0.
    pub fn insert_indent(&self) -> u8 {
        self.selected_entry().map(|entry| entry.indent).unwrap_or(0)
    }

    /// Describes where the next entry will land.
    pub fn insertion_indicator(&self) -> String {
        match self.selected_entry() {
            Some(entry) => format!(
                "{}{SAME_LEVEL_INDICATOR}",
                "  ".repeat(usize::from(entry.indent))
            ),
            None => APPEND_INDICATOR.to_string(),
        }
    }

    /// Classifies `text` and inserts it after the selection.
    ///
    /// Returns the new id, which also becomes the selection. Blank input
    /// creates nothing.
    pub fn add_entry(&mut self, text: &str) -> Option<EntryId> {
        let Some(parsed) = parse_entry_input(text) else {
            debug!("event=entry_add module=service status=noop reason=blank_input");
            return None;
        };
        let anchor = self.selected_entry();
        let indent = anchor.as_ref().map(|entry| entry.indent).unwrap_or(0);
        let after = anchor.map(|entry| entry.id);
        let new_id = self
            .store
            .add(&parsed.entry_type, &parsed.content, indent, after);
        self.selected = Some(new_id);
        debug!(
            "event=entry_add module=service status=ok entry_id={} indent={} anchored={}",
            new_id,
            indent,
            after.is_some()
        );
        Some(new_id)
    }

    /// Replaces the selected entry's content. Blank content is rejected.
    pub fn edit_selected(&mut self, content: &str) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        self.update_entry(id, content)
    }

    /// Replaces content of `id` and stamps its update time.
    pub fn update_entry(&mut self, id: EntryId, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        let applied = self.store.update(id, content);
        log_mutation("entry_update", id, applied);
        applied
    }

    /// Removes the selected entry only; its descendants stay in place.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let applied = self.store.delete(id);
        if applied {
            self.selected = None;
        }
        log_mutation("entry_delete", id, applied);
        applied
    }

    /// Copies the selected entry right below it and selects the copy.
    pub fn duplicate_selected(&mut self) -> Option<EntryId> {
        let id = self.selected?;
        let new_id = self.store.duplicate(id);
        if let Some(new_id) = new_id {
            self.selected = Some(new_id);
        }
        log_mutation("entry_duplicate", id, new_id.is_some());
        new_id
    }

    /// Swaps the selected entry with its raw-sequence neighbour.
    pub fn move_selected(&mut self, direction: MoveDirection) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let applied = self.store.move_entry(id, direction);
        log_mutation("entry_move", id, applied);
        applied
    }

    /// Shifts the selected entry's indent by `delta`, clamped.
    pub fn set_indent(&mut self, delta: i32) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let applied = self.store.set_indent(id, delta);
        log_mutation("entry_indent", id, applied);
        applied
    }

    pub fn toggle_collapse_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.toggle_collapse(id),
            None => false,
        }
    }

    /// Flips the collapse flag of `id`.
    pub fn toggle_collapse(&mut self, id: EntryId) -> bool {
        let applied = self.store.toggle_collapse(id);
        log_mutation("entry_toggle_collapse", id, applied);
        applied
    }

    pub fn expand_all(&mut self) {
        self.store.set_all_collapsed(false);
        debug!("event=expand_all module=service status=ok");
    }

    pub fn collapse_all(&mut self) {
        self.store.set_all_collapsed(true);
        debug!("event=collapse_all module=service status=ok");
    }

    /// Replaces both filter constraints.
    pub fn set_filter(&mut self, query: Option<String>, type_tag: Option<String>) {
        self.filter = EntryFilter::new(query, type_tag);
    }

    pub fn clear_filter(&mut self) {
        self.filter = EntryFilter::default();
    }

    /// Toggles quick type-filter slot `slot` (1-based).
    pub fn toggle_quick_type_filter(&mut self, slot: usize) -> bool {
        self.filter.toggle_quick_type(slot)
    }

    /// Flips details mode and returns the new state.
    pub fn toggle_details(&mut self) -> bool {
        self.show_details = !self.show_details;
        self.show_details
    }

    /// Content as displayed for `entry` under the current details mode.
    pub fn display_content(&self, entry: &Entry) -> String {
        if self.show_details && !entry.is_default_type() {
            format!("{}:: {}", entry.entry_type, entry.content)
        } else {
            entry.content.clone()
        }
    }

    /// Returns the selected entry's content for the clipboard.
    pub fn copy_selected_content(&self) -> Option<String> {
        self.selected_entry().map(|entry| entry.content)
    }

    /// Indices of the current view: filtered first, then visibility-checked
    /// against the full sequence.
    pub fn view_indices(&self) -> Vec<usize> {
        let entries = self.store.snapshot();
        visible_indices(&entries, filter_indices(&entries, &self.filter))
    }

    /// Builds the rows the UI renders for the current view.
    pub fn view(&self) -> Vec<OutlineRow> {
        let entries = self.store.snapshot();
        visible_indices(&entries, filter_indices(&entries, &self.filter))
            .into_iter()
            .map(|index| {
                let entry = &entries[index];
                OutlineRow {
                    index,
                    has_children: has_children(&entries, index),
                    is_selected: self.selected == Some(entry.id),
                    tone: tone_for_type(&entry.entry_type),
                    display: self.display_content(entry),
                    entry: entry.clone(),
                }
            })
            .collect()
    }

    /// Moves the selection; returns whether it changed.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        let entries = self.store.snapshot();
        let view = visible_indices(&entries, filter_indices(&entries, &self.filter));
        match navigate(&entries, &view, self.selected, direction) {
            Some(next) if self.selected != Some(next) => {
                self.selected = Some(next);
                true
            }
            _ => false,
        }
    }

    /// Serializes the full sequence for download.
    pub fn export_all(&self) -> ExchangeResult<ExportArtifact> {
        let entries = self.store.snapshot();
        let artifact = export_artifact(&entries)?;
        info!(
            "event=export module=service status=ok entries={} bytes={}",
            entries.len(),
            artifact.contents.len()
        );
        Ok(artifact)
    }

    /// Replaces the outline with the bundled demo and clears the selection.
    pub fn load_demo(&mut self) -> ExchangeResult<usize> {
        let entries = demo_entries()?;
        Ok(self.replace_entries(entries, "demo"))
    }

    /// Replaces the outline with a flattened section document.
    pub fn import_document(&mut self, json: &str) -> ExchangeResult<usize> {
        let entries = import_document_str(json)?;
        Ok(self.replace_entries(entries, "document"))
    }

    fn replace_entries(&mut self, entries: Vec<Entry>, source: &str) -> usize {
        let count = entries.len();
        self.store.replace_all(entries);
        self.selected = None;
        info!("event=import module=service status=ok source={source} entries={count}");
        count
    }

    /// Runs one command against the session.
    ///
    /// Only `ExportAll` and `LoadDemo` can fail.
    pub fn dispatch(&mut self, command: Command) -> ExchangeResult<CommandOutput> {
        let output = match command {
            Command::AddEntry(text) => match self.add_entry(&text) {
                Some(id) => CommandOutput::Created(id),
                None => CommandOutput::Noop,
            },
            Command::SelectEntry(id) => CommandOutput::from_applied(self.select_entry(id)),
            Command::Navigate(direction) => CommandOutput::from_applied(self.navigate(direction)),
            Command::DeleteSelected => CommandOutput::from_applied(self.delete_selected()),
            Command::DuplicateSelected => match self.duplicate_selected() {
                Some(id) => CommandOutput::Created(id),
                None => CommandOutput::Noop,
            },
            Command::MoveSelected(direction) => {
                CommandOutput::from_applied(self.move_selected(direction))
            }
            Command::SetIndent(delta) => CommandOutput::from_applied(self.set_indent(delta)),
            Command::ToggleCollapseSelected => {
                CommandOutput::from_applied(self.toggle_collapse_selected())
            }
            Command::ExpandAll => {
                self.expand_all();
                CommandOutput::Applied
            }
            Command::CollapseAll => {
                self.collapse_all();
                CommandOutput::Applied
            }
            Command::SetFilter { query, type_tag } => {
                self.set_filter(query, type_tag);
                CommandOutput::Applied
            }
            Command::ClearFilter => {
                self.clear_filter();
                CommandOutput::Applied
            }
            Command::ToggleQuickTypeFilter(slot) => {
                CommandOutput::from_applied(self.toggle_quick_type_filter(slot))
            }
            Command::EditSelected(content) => {
                CommandOutput::from_applied(self.edit_selected(&content))
            }
            Command::ToggleDetails => {
                self.toggle_details();
                CommandOutput::Applied
            }
            Command::ExportAll => CommandOutput::Exported(self.export_all()?),
            Command::LoadDemo => {
                self.load_demo()?;
                CommandOutput::Applied
            }
            Command::CopySelectedContent => match self.copy_selected_content() {
                Some(content) => CommandOutput::Copied(content),
                None => CommandOutput::Noop,
            },
        };
        Ok(output)
    }
}

fn log_mutation(event: &str, entry_id: EntryId, applied: bool) {
    let status = if applied { "ok" } else { "noop" };
    debug!("event={event} module=service status={status} entry_id={entry_id}");
}
