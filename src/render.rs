use crate::model::{Highlight, Notebook};

/// Render the notebook as a markdown report. Pure and total; identical
/// notebooks always produce identical output.
///
/// Layout: title heading, optional author line, blank line, then one
/// numbered entry per highlight with an optional ` · `-joined metadata
/// parenthetical and an indented quoted note line. A chapter subheading is
/// emitted whenever an entry's chapter differs from the previous one.
pub fn render_markdown(notebook: &Notebook) -> String {
    let mut out = String::new();

    out.push_str("# ");
    out.push_str(&notebook.title);
    out.push('\n');
    if let Some(author) = &notebook.author {
        out.push_str("by ");
        out.push_str(author);
        out.push('\n');
    }
    out.push('\n');

    let mut chapter: Option<&str> = None;
    for (i, highlight) in notebook.highlights.iter().enumerate() {
        if let Some(current) = highlight.chapter.as_deref() {
            if chapter != Some(current) {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("## ");
                out.push_str(current);
                out.push_str("\n\n");
                chapter = Some(current);
            }
        }

        match metadata_suffix(highlight) {
            Some(meta) => out.push_str(&format!("{}. {} ({})\n", i + 1, highlight.text, meta)),
            None => out.push_str(&format!("{}. {}\n", i + 1, highlight.text)),
        }
        if let Some(note) = &highlight.note {
            out.push_str(&format!("   > {}\n", note));
        }
    }

    out
}

/// Present fields joined by a middle dot in fixed order; `None` when the
/// entry carries no metadata at all.
fn metadata_suffix(highlight: &Highlight) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(color) = highlight.color {
        parts.push(color.to_string());
    }
    if let Some(page) = &highlight.page {
        parts.push(format!("Page {}", page));
    }
    if let Some(location) = &highlight.location {
        parts.push(format!("Loc {}", location));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn bare(text: &str) -> Highlight {
        Highlight {
            text: text.to_string(),
            note: None,
            color: None,
            page: None,
            location: None,
            chapter: None,
        }
    }

    #[test]
    fn full_entry_with_metadata_and_note() {
        let notebook = Notebook {
            title: "Atlas".to_string(),
            author: Some("J. Doe".to_string()),
            highlights: vec![Highlight {
                text: "Sample".to_string(),
                note: Some("good point".to_string()),
                color: Some(Color::Yellow),
                page: Some("12".to_string()),
                location: Some("340".to_string()),
                chapter: None,
            }],
        };
        let report = render_markdown(&notebook);
        assert_eq!(
            report,
            "# Atlas\nby J. Doe\n\n1. Sample (Yellow · Page 12 · Loc 340)\n   > good point\n"
        );
    }

    #[test]
    fn no_metadata_means_no_parenthetical() {
        let notebook = Notebook {
            title: "T".to_string(),
            author: None,
            highlights: vec![bare("plain passage")],
        };
        let report = render_markdown(&notebook);
        assert_eq!(report, "# T\n\n1. plain passage\n");
        assert!(!report.contains("()"));
    }

    #[test]
    fn partial_metadata_has_no_stray_separators() {
        let mut h = bare("passage");
        h.location = Some("42".to_string());
        let notebook = Notebook {
            title: "T".to_string(),
            author: None,
            highlights: vec![h],
        };
        assert!(render_markdown(&notebook).contains("1. passage (Loc 42)\n"));
    }

    #[test]
    fn entries_numbered_in_list_order() {
        let notebook = Notebook {
            title: "T".to_string(),
            author: None,
            highlights: vec![bare("first"), bare("second"), bare("third")],
        };
        let report = render_markdown(&notebook);
        assert!(report.contains("1. first\n2. second\n3. third\n"));
    }

    #[test]
    fn chapter_subheadings_on_change() {
        let mut a = bare("one");
        a.chapter = Some("Intro".to_string());
        let mut b = bare("two");
        b.chapter = Some("Intro".to_string());
        let mut c = bare("three");
        c.chapter = Some("Endgame".to_string());
        let notebook = Notebook {
            title: "T".to_string(),
            author: None,
            highlights: vec![a, b, c],
        };
        let report = render_markdown(&notebook);
        assert_eq!(
            report,
            "# T\n\n## Intro\n\n1. one\n2. two\n\n## Endgame\n\n3. three\n"
        );
    }

    #[test]
    fn page_range_round_trips() {
        let mut h = bare("p");
        h.page = Some("123-125".to_string());
        let notebook = Notebook {
            title: "T".to_string(),
            author: None,
            highlights: vec![h],
        };
        assert!(render_markdown(&notebook).contains("(Page 123-125)"));
    }
}
