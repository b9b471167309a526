//! Type tag tone classification.
//!
//! Maps a free-form type tag onto a small set of display tones. The UI layer
//! owns the actual colors.

use serde::{Deserialize, Serialize};

/// Display tone for a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTone {
    Green,
    Red,
    Yellow,
    Purple,
    Blue,
    Cyan,
    Orange,
    Gray,
    /// Plain foreground, used for `log` and unknown tags.
    Neutral,
    /// Accent used for `ctx`.
    Accent,
}

// Order matters: the first keyword contained in the tag wins.
const TONE_KEYWORDS: &[(&str, TypeTone)] = &[
    ("synthesis", TypeTone::Green),
    ("collapse", TypeTone::Red),
    ("epistemological", TypeTone::Red),
    ("resistance", TypeTone::Yellow),
    ("methodological", TypeTone::Yellow),
    ("heresy", TypeTone::Purple),
    ("business", TypeTone::Purple),
    ("debug", TypeTone::Blue),
    ("debugging", TypeTone::Blue),
    ("praxis", TypeTone::Green),
    ("consciousness", TypeTone::Green),
    ("ritual", TypeTone::Cyan),
    ("knowledge", TypeTone::Cyan),
    ("bridge", TypeTone::Orange),
    ("connection", TypeTone::Orange),
    ("meta", TypeTone::Gray),
    ("metadata", TypeTone::Gray),
    ("structure", TypeTone::Gray),
    ("log", TypeTone::Neutral),
    ("ctx", TypeTone::Accent),
];

/// Classifies a type tag by case-insensitive partial keyword match.
pub fn tone_for_type(entry_type: &str) -> TypeTone {
    let lowered = entry_type.to_lowercase();
    TONE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, tone)| *tone)
        .unwrap_or(TypeTone::Neutral)
}
