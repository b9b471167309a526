use hybrid_notes_core::{
    demo_entries, export_artifact, export_entries, import_document_str, parse_export,
    ExchangeError, MemoryEntryStore, OutlineService, EXPORT_FILE_NAME,
};
use serde_json::json;

fn shape(entries: &[hybrid_notes_core::Entry]) -> Vec<(String, u8, String)> {
    entries
        .iter()
        .map(|entry| (entry.content.clone(), entry.indent, entry.entry_type.clone()))
        .collect()
}

fn row(content: &str, indent: u8, entry_type: &str) -> (String, u8, String) {
    (content.to_string(), indent, entry_type.to_string())
}

#[test]
fn demo_import_emits_exact_sequence() {
    let entries = demo_entries().unwrap();
    let structure = "structure:: {\n  \"unit\": \"entry\",\n  \"grouping\": \"indent run\",\n  \"max_depth\": 6\n}";
    let commands = "commands:: [\n  \"navigate\",\n  \"collapse\",\n  \"filter\",\n  \"export\"\n]";

    let expected = vec![
        row("OutlineFieldNotes - HN-20250721-1700-DEMO", 0, "synthesis"),
        row("capture first", 1, "knowledge"),
        row("observation:: Typing is faster than filing", 2, "observation"),
        row("habit:: log first, structure later", 2, "habit"),
        row("quote:: if it is not written down it did not happen", 2, "quote"),
        row("metadata", 2, "meta"),
        row("timestamp:: 17:00", 3, "metadata"),
        row("speaker:: host", 3, "metadata"),
        row("priority:: high", 3, "metadata"),
        row("indent as structure", 1, "methodological"),
        row("framework:: flat list with integer depth", 2, "framework"),
        row(structure, 2, "structure"),
        row("payoff:: moves and exports stay trivial", 2, "payoff"),
        row("metadata", 2, "meta"),
        row("timestamp:: 17:26", 3, "metadata"),
        row("revisited:: true", 3, "metadata"),
        row("keyboard only flow", 1, "debug"),
        row("concept:: every command reachable without a mouse", 2, "concept"),
        row(commands, 2, "structure"),
        row("validation:: daily notes kept for a week", 2, "validation"),
        row("connections", 1, "bridge"),
        row("capture_first → keyboard_only_flow [enables]", 2, "connection"),
        row("indent_as_structure → keyboard_only_flow [supports]", 2, "connection"),
    ];
    assert_eq!(shape(&entries), expected);
}

#[test]
fn header_uses_document_timestamp() {
    let entries = demo_entries().unwrap();
    assert_eq!(entries[0].created_at.to_rfc3339(), "2025-07-21T17:00:00+00:00");
}

#[test]
fn import_tolerates_missing_metadata_and_connections() {
    let document = json!({
        "root": {
            "type": "Bare",
            "sections": [
                { "id": "only_one", "type": "plain", "content": { "note": "hi" } }
            ]
        }
    });

    let entries = import_document_str(&document.to_string()).unwrap();
    assert_eq!(
        shape(&entries),
        vec![
            row("Bare", 0, "synthesis"),
            row("only one", 1, "plain"),
            row("note:: hi", 2, "note"),
        ]
    );
}

#[test]
fn empty_connection_list_adds_no_block() {
    let document = json!({
        "floatAST": {
            "type": "Legacy",
            "metadata": { "bridge_id": "B-1" },
            "sections": [],
            "connections": []
        }
    });

    let entries = import_document_str(&document.to_string()).unwrap();
    assert_eq!(shape(&entries), vec![row("Legacy - B-1", 0, "synthesis")]);
}

#[test]
fn import_rejects_malformed_document() {
    let err = import_document_str("{\"root\": {\"sections\": [{\"id\": 1}]}}").unwrap_err();
    assert!(matches!(err, ExchangeError::InvalidDocument(_)));
}

#[test]
fn export_then_parse_preserves_every_field() {
    let mut service = OutlineService::new(MemoryEntryStore::new());
    service.add_entry("ctx:: root");
    service.add_entry("child line");
    service.set_indent(1);
    service.toggle_collapse_selected();
    service.edit_selected("child line edited");

    let exported = export_entries(&service.entries()).unwrap();
    let restored = parse_export(&exported).unwrap();

    assert_eq!(&restored, service.entries().as_ref());
    assert_eq!(
        shape(&restored),
        vec![row("root", 0, "ctx"), row("child line edited", 1, "log")]
    );
}

#[test]
fn export_artifact_uses_fixed_file_name() {
    let artifact = export_artifact(&demo_entries().unwrap()).unwrap();

    assert_eq!(artifact.file_name, EXPORT_FILE_NAME);
    assert_eq!(artifact.mime_type, "application/json");
    let value: serde_json::Value = serde_json::from_str(&artifact.contents).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 23);
}
