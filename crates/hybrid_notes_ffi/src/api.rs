//! FFI command API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the outline command surface to Dart via FRB.
//! - Own the single process-wide outline session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Commands run one at a time under the session lock.
//! - Ids cross the boundary as UTF-8 UUID strings.

use hybrid_notes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Command, CommandOutput, MemoryEntryStore, MoveDirection, NavDirection, OutlineRow,
    OutlineService,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

type Session = OutlineService<MemoryEntryStore>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for outline commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesActionResponse {
    /// Whether the command changed anything.
    pub ok: bool,
    /// Created entry ID, for add and duplicate.
    pub entry_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NotesActionResponse {
    fn applied(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            message: message.into(),
        }
    }

    fn noop(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// One rendered outline row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesRow {
    pub entry_id: String,
    pub display: String,
    pub entry_type: String,
    /// Tone name (`green|red|...|neutral|accent`).
    pub tone: String,
    pub indent: u8,
    pub has_children: bool,
    pub is_collapsed: bool,
    pub is_selected: bool,
    /// RFC 3339 creation time.
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Snapshot of everything the outline screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesViewResponse {
    pub rows: Vec<NotesRow>,
    pub selected_id: Option<String>,
    pub insertion_indicator: String,
    pub filter_query: Option<String>,
    pub filter_type: Option<String>,
    pub show_details: bool,
    pub total_entries: u32,
}

/// Export payload for the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesExportResponse {
    pub ok: bool,
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
    pub message: String,
}

/// Classifies one chat line and inserts it after the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add_entry(text: String) -> NotesActionResponse {
    run(Command::AddEntry(text))
}

/// Selects an entry by id; `None` clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_select_entry(entry_id: Option<String>) -> NotesActionResponse {
    match entry_id.as_deref().map(parse_entry_id).transpose() {
        Ok(id) => run(Command::SelectEntry(id)),
        Err(response) => response,
    }
}

/// Moves the selection: `up|down|first|last|parent|child`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_navigate(direction: String) -> NotesActionResponse {
    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "up" => NavDirection::Up,
        "down" => NavDirection::Down,
        "first" => NavDirection::First,
        "last" => NavDirection::Last,
        "parent" => NavDirection::Parent,
        "child" => NavDirection::Child,
        other => return NotesActionResponse::noop(format!("unknown direction `{other}`")),
    };
    run(Command::Navigate(direction))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete_selected() -> NotesActionResponse {
    run(Command::DeleteSelected)
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_duplicate_selected() -> NotesActionResponse {
    run(Command::DuplicateSelected)
}

/// Swaps the selection with its neighbour: `up|down`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_move_selected(direction: String) -> NotesActionResponse {
    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "up" => MoveDirection::Up,
        "down" => MoveDirection::Down,
        other => return NotesActionResponse::noop(format!("unknown direction `{other}`")),
    };
    run(Command::MoveSelected(direction))
}

/// Indents (`delta > 0`) or outdents the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_indent(delta: i32) -> NotesActionResponse {
    run(Command::SetIndent(delta))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_collapse_selected() -> NotesActionResponse {
    run(Command::ToggleCollapseSelected)
}

/// Flips collapse on any entry, e.g. from a chevron click.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_collapse(entry_id: String) -> NotesActionResponse {
    let id = match parse_entry_id(&entry_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if lock_session().toggle_collapse(id) {
        NotesActionResponse::applied("toggled", None)
    } else {
        NotesActionResponse::noop("entry not found")
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_expand_all() -> NotesActionResponse {
    run(Command::ExpandAll)
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_collapse_all() -> NotesActionResponse {
    run(Command::CollapseAll)
}

/// Replaces search query and type tag; blank values clear them.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_filter(query: Option<String>, type_tag: Option<String>) -> NotesActionResponse {
    run(Command::SetFilter { query, type_tag })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_clear_filter() -> NotesActionResponse {
    run(Command::ClearFilter)
}

/// Toggles quick type-filter slot `1..=9`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_type_filter(slot: u32) -> NotesActionResponse {
    run(Command::ToggleQuickTypeFilter(slot as usize))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_edit_selected(content: String) -> NotesActionResponse {
    run(Command::EditSelected(content))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_details() -> NotesActionResponse {
    run(Command::ToggleDetails)
}

/// Replaces the outline with the bundled demo document.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_load_demo() -> NotesActionResponse {
    run(Command::LoadDemo)
}

/// Returns the selected content for the clipboard, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_copy_selected() -> Option<String> {
    lock_session().copy_selected_content()
}

/// Serializes all entries for download.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_export() -> NotesExportResponse {
    match lock_session().export_all() {
        Ok(artifact) => NotesExportResponse {
            ok: true,
            file_name: artifact.file_name,
            mime_type: artifact.mime_type,
            contents: artifact.contents,
            message: "ok".to_string(),
        },
        Err(err) => {
            warn!("event=ffi_export module=ffi status=error");
            NotesExportResponse {
                ok: false,
                file_name: String::new(),
                mime_type: String::new(),
                contents: String::new(),
                message: format!("notes_export failed: {err}"),
            }
        }
    }
}

/// Returns the current filtered, visibility-checked view.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_view() -> NotesViewResponse {
    let session = lock_session();
    NotesViewResponse {
        rows: session.view().into_iter().map(to_row).collect(),
        selected_id: session.selected_entry().map(|entry| entry.id.to_string()),
        insertion_indicator: session.insertion_indicator(),
        filter_query: session.filter().query.clone(),
        filter_type: session.filter().type_tag.clone(),
        show_details: session.show_details(),
        total_entries: u32::try_from(session.entries().len()).unwrap_or(u32::MAX),
    }
}

fn run(command: Command) -> NotesActionResponse {
    match lock_session().dispatch(command) {
        Ok(CommandOutput::Created(id)) => NotesActionResponse::applied("created", Some(id.to_string())),
        Ok(CommandOutput::Applied) => NotesActionResponse::applied("ok", None),
        Ok(CommandOutput::Noop) => NotesActionResponse::noop("nothing changed"),
        Ok(CommandOutput::Copied(_)) | Ok(CommandOutput::Exported(_)) => {
            NotesActionResponse::applied("ok", None)
        }
        Err(err) => NotesActionResponse::noop(format!("command failed: {err}")),
    }
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(OutlineService::new(MemoryEntryStore::new())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn parse_entry_id(raw: &str) -> Result<Uuid, NotesActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|err| NotesActionResponse::noop(format!("invalid entry id `{raw}`: {err}")))
}

fn to_row(row: OutlineRow) -> NotesRow {
    NotesRow {
        entry_id: row.entry.id.to_string(),
        tone: format!("{:?}", row.tone).to_ascii_lowercase(),
        indent: row.entry.indent,
        has_children: row.has_children,
        is_collapsed: row.entry.collapsed(),
        is_selected: row.is_selected,
        created_at: row.entry.created_at.to_rfc3339(),
        updated_at: row.entry.updated_at.map(|at| at.to_rfc3339()),
        entry_type: row.entry.entry_type,
        display: row.display,
    }
}
