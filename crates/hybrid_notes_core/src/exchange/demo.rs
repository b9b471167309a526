//! Bundled demo document.

use super::import::import_document_str;
use super::ExchangeResult;
use crate::model::entry::Entry;

/// Demo section document: three sections and two connections.
pub const DEMO_DOCUMENT: &str = r#"{
  "root": {
    "version": "1.0",
    "type": "OutlineFieldNotes",
    "metadata": {
      "bridge_id": "HN-20250721-1700-DEMO",
      "timestamp": "2025-07-21T17:00:00Z"
    },
    "sections": [
      {
        "id": "capture_first",
        "type": "knowledge_capture",
        "content": {
          "observation": "Typing is faster than filing",
          "habit": "log first, structure later",
          "quote": "if it is not written down it did not happen"
        },
        "metadata": {
          "timestamp": "17:00",
          "speaker": "host",
          "priority": "high"
        }
      },
      {
        "id": "indent_as_structure",
        "type": "methodological_outline",
        "content": {
          "framework": "flat list with integer depth",
          "structure": {
            "unit": "entry",
            "grouping": "indent run",
            "max_depth": 6
          },
          "payoff": "moves and exports stay trivial"
        },
        "metadata": {
          "timestamp": "17:26",
          "revisited": true
        }
      },
      {
        "id": "keyboard_only_flow",
        "type": "debug_session",
        "content": {
          "concept": "every command reachable without a mouse",
          "commands": ["navigate", "collapse", "filter", "export"],
          "validation": "daily notes kept for a week"
        }
      }
    ],
    "connections": [
      {
        "from": "capture_first",
        "to": "keyboard_only_flow",
        "type": "enables"
      },
      {
        "from": "indent_as_structure",
        "to": "keyboard_only_flow",
        "type": "supports"
      }
    ]
  }
}"#;

/// Flattens the bundled demo document into entries.
pub fn demo_entries() -> ExchangeResult<Vec<Entry>> {
    import_document_str(DEMO_DOCUMENT)
}
