//! Section document import.
//!
//! # Responsibility
//! - Parse the nested section document shape.
//! - Flatten it into entries at fixed indent levels.
//!
//! # Invariants
//! - Emission order: header, then each section (header, content fields,
//!   metadata group and fields), then the connections block.
//! - Field order is document order (`serde_json` keeps insertion order).
//! - Missing `metadata` or `connections` contribute no entries.

use super::{ExchangeError, ExchangeResult};
use crate::model::entry::Entry;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

const HEADER_INDENT: u8 = 0;
const SECTION_INDENT: u8 = 1;
const FIELD_INDENT: u8 = 2;
const METADATA_FIELD_INDENT: u8 = 3;

const HEADER_TYPE: &str = "synthesis";
const STRUCTURE_TYPE: &str = "structure";
const METADATA_GROUP_TYPE: &str = "meta";
const METADATA_FIELD_TYPE: &str = "metadata";
const CONNECTIONS_TYPE: &str = "bridge";
const CONNECTION_TYPE: &str = "connection";

/// Top-level import document.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportDocument {
    #[serde(alias = "floatAST")]
    pub root: ImportRoot,
}

/// Document body holding sections and their connections.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRoot {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub sections: Vec<ImportSection>,
    #[serde(default)]
    pub connections: Option<Vec<ImportConnection>>,
}

/// Document-level metadata used for the synthesized header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub bridge_id: Option<String>,
    /// RFC 3339 timestamp for the header entry.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// Directed, named link between two section ids.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConnection {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Parses a JSON document and flattens it into entries.
pub fn import_document_str(json: &str) -> ExchangeResult<Vec<Entry>> {
    let document: ImportDocument =
        serde_json::from_str(json).map_err(ExchangeError::InvalidDocument)?;
    flatten_document(&document)
}

/// Flattens a parsed document into an ordered entry list.
pub fn flatten_document(document: &ImportDocument) -> ExchangeResult<Vec<Entry>> {
    let root = &document.root;
    let mut entries = Vec::new();

    entries.push(Entry::with_created_at(
        HEADER_TYPE,
        header_content(root),
        HEADER_INDENT,
        header_timestamp(root).unwrap_or_else(Utc::now),
    ));

    for section in &root.sections {
        entries.push(Entry::new(
            section_type(&section.kind),
            section.id.replace('_', " "),
            SECTION_INDENT,
        ));

        for (key, value) in &section.content {
            let entry = if is_structured(value) {
                let rendered =
                    serde_json::to_string_pretty(value).map_err(ExchangeError::Serialize)?;
                Entry::new(STRUCTURE_TYPE, format!("{key}:: {rendered}"), FIELD_INDENT)
            } else {
                Entry::new(key.as_str(), format!("{key}:: {}", scalar_text(value)), FIELD_INDENT)
            };
            entries.push(entry);
        }

        if let Some(metadata) = &section.metadata {
            entries.push(Entry::new(METADATA_GROUP_TYPE, "metadata", FIELD_INDENT));
            for (key, value) in metadata {
                entries.push(Entry::new(
                    METADATA_FIELD_TYPE,
                    format!("{key}:: {}", scalar_text(value)),
                    METADATA_FIELD_INDENT,
                ));
            }
        }
    }

    let connections = root.connections.as_deref().unwrap_or_default();
    if !connections.is_empty() {
        entries.push(Entry::new(CONNECTIONS_TYPE, "connections", SECTION_INDENT));
        for connection in connections {
            entries.push(Entry::new(
                CONNECTION_TYPE,
                format!(
                    "{} → {} [{}]",
                    connection.from, connection.to, connection.kind
                ),
                FIELD_INDENT,
            ));
        }
    }

    Ok(entries)
}

fn header_content(root: &ImportRoot) -> String {
    let bridge_id = root
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.bridge_id.as_deref());
    match (root.kind.as_deref(), bridge_id) {
        (Some(kind), Some(bridge_id)) => format!("{kind} - {bridge_id}"),
        (Some(kind), None) => kind.to_string(),
        (None, Some(bridge_id)) => bridge_id.to_string(),
        (None, None) => "document".to_string(),
    }
}

fn header_timestamp(root: &ImportRoot) -> Option<DateTime<Utc>> {
    let raw = root.metadata.as_ref()?.timestamp.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Section types like `business_model_heresy` collapse to their first word.
fn section_type(kind: &str) -> &str {
    kind.split('_').next().unwrap_or(kind)
}

// Null counts as structured so it renders as the JSON literal `null`.
fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_) | Value::Null)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{scalar_text, section_type};
    use serde_json::json;

    #[test]
    fn section_type_keeps_first_word() {
        assert_eq!(section_type("epistemological_collapse"), "epistemological");
        assert_eq!(section_type("plain"), "plain");
        assert_eq!(section_type(""), "");
    }

    #[test]
    fn scalar_text_unquotes_strings_only() {
        assert_eq!(scalar_text(&json!("high")), "high");
        assert_eq!(scalar_text(&json!(16)), "16");
        assert_eq!(scalar_text(&json!(true)), "true");
    }
}
