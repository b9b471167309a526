//! Entry sequence export.
//!
//! # Responsibility
//! - Serialize the full sequence as a pretty-printed JSON array.
//! - Rebuild entries from a previously exported document.
//!
//! # Invariants
//! - Every entry field survives export and reconstruction unchanged.

use super::{ExchangeError, ExchangeResult};
use crate::model::entry::Entry;

/// File name offered for the downloadable export.
pub const EXPORT_FILE_NAME: &str = "hybrid-notes-export.json";

/// Media type of the export document.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Export payload handed to the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

/// Serializes entries in sequence order.
pub fn export_entries(entries: &[Entry]) -> ExchangeResult<String> {
    serde_json::to_string_pretty(entries).map_err(ExchangeError::Serialize)
}

/// Builds the downloadable export artifact for `entries`.
pub fn export_artifact(entries: &[Entry]) -> ExchangeResult<ExportArtifact> {
    Ok(ExportArtifact {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        contents: export_entries(entries)?,
    })
}

/// Rebuilds the entry sequence from an export document.
pub fn parse_export(json: &str) -> ExchangeResult<Vec<Entry>> {
    serde_json::from_str(json).map_err(ExchangeError::InvalidDocument)
}
