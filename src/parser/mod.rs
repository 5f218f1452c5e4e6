pub mod blocks;
pub mod merge;
pub mod meta;
pub mod text;
pub mod title;

use tracing::debug;

use crate::model::{Highlight, Notebook};

/// Two-pass pipeline: title/author over the raw document, then
/// scan → fold over the heading/body block stream.
///
/// Never fails. A document with no recognizable heading/body pairs degrades
/// to a single whole-document highlight (or an empty list when the document
/// normalizes to nothing).
pub fn parse_notebook(html: &str) -> Notebook {
    let title = title::extract_title(html);
    let author = title::extract_author(html);

    let raw = blocks::scan_blocks(html);
    let has_pairs = raw
        .iter()
        .any(|b| matches!(b, blocks::RawBlock::Entry { .. }));

    let highlights = if has_pairs {
        merge::fold_entries(raw)
    } else {
        whole_document_fallback(html)
    };

    Notebook {
        title,
        author,
        highlights,
    }
}

fn whole_document_fallback(html: &str) -> Vec<Highlight> {
    let full = text::normalize(html);
    if full.is_empty() {
        return Vec::new();
    }
    debug!("no heading/body pairs recognized; keeping whole document as one highlight");
    vec![Highlight {
        text: full,
        note: None,
        color: None,
        page: None,
        location: None,
        chapter: None,
    }]
}
