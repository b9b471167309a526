//! Core outline engine for Hybrid Notes.
//! This crate is the single source of truth for outline invariants.

pub mod exchange;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod parser;
pub mod repo;
pub mod search;
pub mod service;
pub mod tree;

pub use exchange::demo::{demo_entries, DEMO_DOCUMENT};
pub use exchange::export::{
    export_artifact, export_entries, parse_export, ExportArtifact, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
pub use exchange::import::{flatten_document, import_document_str, ImportDocument};
pub use exchange::{ExchangeError, ExchangeResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryId, COPY_SUFFIX, DEFAULT_ENTRY_TYPE, MAX_INDENT};
pub use model::palette::{tone_for_type, TypeTone};
pub use navigation::{navigate, NavDirection};
pub use parser::{parse_entry_input, ParsedInput};
pub use repo::entry_store::{EntryStore, MemoryEntryStore, MoveDirection};
pub use search::filter::{filter_entries, filter_indices, EntryFilter, QUICK_TYPE_FILTERS};
pub use service::command::{Command, CommandOutput};
pub use service::outline_service::{OutlineRow, OutlineService};
pub use tree::{has_children, is_visible, parent_index, subtree_end, visible_indices};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
