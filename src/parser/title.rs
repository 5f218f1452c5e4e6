use std::sync::LazyLock;

use regex::Regex;

use super::text::normalize;
use crate::model::DEFAULT_TITLE;

// Candidate patterns in precedence order; first non-empty capture wins.
// The two export templates disagree on where the book identity lives, so
// each list covers both plus a generic fallback.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        class_block_re("notebookTitle"),
        class_block_re("bookTitle"),
        Regex::new(r"(?is)<title[^>]*>(.*?)</title").unwrap(),
    ]
});

static AUTHOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        class_block_re("authors"),
        class_block_re("subtitle"),
        Regex::new(r#"(?is)<meta[^>]*name\s*=\s*["']author["'][^>]*content\s*=\s*["']([^"']*)["']"#)
            .unwrap(),
    ]
});

/// Inner content of the first tag carrying `marker` in its class attribute.
fn class_block_re(marker: &str) -> Regex {
    Regex::new(&format!(
        r#"(?is)<[a-z][a-z0-9]*[^>]*class\s*=\s*["'][^"']*\b{}\b[^"']*["'][^>]*>(.*?)</"#,
        marker
    ))
    .unwrap()
}

fn first_match(patterns: &[Regex], html: &str) -> Option<String> {
    for re in patterns {
        if let Some(caps) = re.captures(html) {
            let value = normalize(&caps[1]);
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Book title from the raw document; never empty.
pub fn extract_title(html: &str) -> String {
    first_match(&TITLE_PATTERNS, html).unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Author from the raw document, absent when no convention matches.
pub fn extract_author(html: &str) -> Option<String> {
    first_match(&AUTHOR_PATTERNS, html)
}
