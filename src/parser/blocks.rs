//! Forward scan of the raw export for marker-classed blocks.
//!
//! Both known templates tag their blocks with the same class markers but
//! disagree on tag names and nesting, so the scan is tag-agnostic: a marker
//! is valid wherever it sits inside an opening tag, and a block's content
//! runs to the first matching close tag (no nesting awareness).

const SECTION_MARKERS: &[&str] = &["sectionHeading"];
const HEADING_MARKERS: &[&str] = &["noteHeading"];
const BODY_MARKERS: &[&str] = &["noteText"];

/// One recognized fragment, raw (not yet normalized), in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBlock {
    /// Section-heading block content (chapter title).
    Section(String),
    /// A heading block paired with the body block that follows it.
    Entry { heading: String, body: String },
}

struct Found {
    content_start: usize,
    content_end: usize,
    /// First index past the block's closing tag.
    resume: usize,
}

/// Scan the whole document once, yielding section blocks and heading/body
/// pairs in order. A heading with no body before the next heading is
/// dropped; scanning always resumes after the last consumed block.
pub fn scan_blocks(html: &str) -> Vec<RawBlock> {
    let mut out = Vec::new();
    let mut cursor = 0usize;

    while cursor < html.len() {
        let section = next_block(html, cursor, SECTION_MARKERS);
        let heading = next_block(html, cursor, HEADING_MARKERS);

        match (section, heading) {
            (Some(s), h)
                if h.as_ref()
                    .map_or(true, |h| s.content_start < h.content_start) =>
            {
                out.push(RawBlock::Section(
                    html[s.content_start..s.content_end].to_string(),
                ));
                cursor = s.resume;
            }
            (_, Some(h)) => {
                // Pair with the next body block, unless another heading begins first.
                let body = next_block(html, h.resume, BODY_MARKERS);
                let next_heading = next_block(html, h.resume, HEADING_MARKERS);
                match body {
                    Some(b)
                        if next_heading
                            .as_ref()
                            .map_or(true, |n| b.content_start < n.content_start) =>
                    {
                        out.push(RawBlock::Entry {
                            heading: html[h.content_start..h.content_end].to_string(),
                            body: html[b.content_start..b.content_end].to_string(),
                        });
                        cursor = b.resume;
                    }
                    _ => cursor = h.resume,
                }
            }
            // No section and no heading left anywhere after the cursor.
            _ => break,
        }
    }

    out
}

/// Earliest valid marker block at or after `from`, across all `markers`.
fn next_block(html: &str, from: usize, markers: &[&str]) -> Option<Found> {
    let mut best: Option<Found> = None;
    for marker in markers {
        let mut at = from;
        while let Some(rel) = html[at..].find(marker) {
            let pos = at + rel;
            if let Some(found) = block_at(html, pos) {
                if best
                    .as_ref()
                    .map_or(true, |b| found.content_start < b.content_start)
                {
                    best = Some(found);
                }
                break;
            }
            // Marker text occurred outside a tag; keep looking.
            at = pos + marker.len();
        }
    }
    best
}

/// Resolve the block around a marker occurrence: the marker must sit inside
/// an opening tag, and content ends at the first close of that tag name.
fn block_at(html: &str, marker_pos: usize) -> Option<Found> {
    let tag_start = html[..marker_pos].rfind('<')?;
    if html[tag_start..marker_pos].contains('>') {
        return None;
    }

    let name: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }

    let content_start = tag_start + html[tag_start..].find('>')? + 1;
    let close = format!("</{}", name);
    let content_end = content_start + html[content_start..].find(&close)?;
    let resume = match html[content_end..].find('>') {
        Some(r) => content_end + r + 1,
        None => html.len(),
    };

    Some(Found {
        content_start,
        content_end,
        resume,
    })
}
