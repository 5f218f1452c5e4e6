use std::fmt;

use serde::{Deserialize, Serialize};

/// Title used when no candidate pattern matches anything in the document.
pub const DEFAULT_TITLE: &str = "Kindle Notebook";

/// Highlight colors the export templates emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Blue,
    Pink,
    Orange,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Yellow,
        Color::Blue,
        Color::Pink,
        Color::Orange,
        Color::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Pink => "Pink",
            Color::Orange => "Orange",
            Color::Green => "Green",
        }
    }

    /// Case-insensitive lookup; the stored value keeps canonical casing.
    pub fn parse(s: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted passage. Immutable after the merge step, except that the
/// merger may set `note` once and backfill `page` when it was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub note: Option<String>,
    pub color: Option<Color>,
    /// Free-form label; ranges ("123-125") and roman numerals round-trip.
    pub page: Option<String>,
    /// Device location label, same free-form treatment as `page`.
    pub location: Option<String>,
    pub chapter: Option<String>,
}

/// The parse result: document identity plus highlights in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub title: String,
    pub author: Option<String>,
    pub highlights: Vec<Highlight>,
}
