use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::blocks::RawBlock;
use super::{meta, text};
use crate::model::{Color, Highlight};

// Word boundary keeps "Notebook ..." headings out of the note class.
static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^note\b").unwrap());

/// Fold the scanned block stream into the ordered highlight list.
///
/// Highlight blocks append; note blocks attach to an existing highlight by
/// location (reverse scan) or to the most recent one, backfilling a missing
/// page label. A note with no possible target becomes a standalone entry
/// rather than being dropped.
pub fn fold_entries(blocks: Vec<RawBlock>) -> Vec<Highlight> {
    let mut highlights: Vec<Highlight> = Vec::new();
    let mut chapter: Option<String> = None;

    for block in blocks {
        match block {
            RawBlock::Section(raw) => {
                let section = text::normalize(&raw);
                chapter = if section.is_empty() {
                    None
                } else {
                    Some(section)
                };
            }
            RawBlock::Entry { heading, body } => {
                let heading = text::normalize(&heading);
                let body = text::normalize(&body);
                let location = meta::extract_location(&heading);
                let page = meta::extract_page(&heading);
                let color = meta::extract_color(&heading);

                if NOTE_RE.is_match(&heading) {
                    attach_note(&mut highlights, body, location, page, color, chapter.clone());
                } else {
                    highlights.push(Highlight {
                        text: body,
                        note: None,
                        color,
                        page,
                        location,
                        chapter: chapter.clone(),
                    });
                }
            }
        }
    }

    highlights
}

fn attach_note(
    highlights: &mut Vec<Highlight>,
    body: String,
    location: Option<String>,
    page: Option<String>,
    color: Option<Color>,
    chapter: Option<String>,
) {
    // Location match beats recency; a duplicate location resolves to the
    // most recently added highlight carrying it.
    let target = location
        .as_ref()
        .and_then(|loc| {
            highlights
                .iter()
                .rposition(|h| h.location.as_deref() == Some(loc.as_str()))
        })
        .or_else(|| highlights.len().checked_sub(1));

    match target {
        Some(idx) => {
            let target = &mut highlights[idx];
            target.note = Some(body);
            if target.page.is_none() {
                target.page = page;
            }
        }
        None => {
            debug!("note block with no preceding highlight; keeping as standalone entry");
            highlights.push(Highlight {
                text: body,
                note: None,
                color,
                page,
                location,
                chapter,
            });
        }
    }
}
