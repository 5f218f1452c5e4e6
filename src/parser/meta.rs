use std::sync::LazyLock;

use regex::Regex;

use crate::model::Color;

static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blocation\s+(\d[\d-]*)").unwrap());
// Page labels are usually numeric ("14", "123-125") but front matter uses
// roman numerals ("ix"), which must round-trip verbatim.
static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpage\s+(\d[\d-]*|[ivxlcdm]+)\b").unwrap());
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\s*(yellow|blue|pink|orange|green)\s*\)").unwrap());

/// First "Location <digits/hyphens>" token in a normalized heading.
pub fn extract_location(heading: &str) -> Option<String> {
    LOCATION_RE
        .captures(heading)
        .map(|caps| caps[1].to_string())
}

/// First "Page <label>" token in a normalized heading, captured verbatim.
pub fn extract_page(heading: &str) -> Option<String> {
    PAGE_RE.captures(heading).map(|caps| caps[1].to_string())
}

/// First parenthesized color name; tag stripping leaves spaces inside the
/// parentheses, so "( yellow )" matches too.
pub fn extract_color(heading: &str) -> Option<Color> {
    COLOR_RE
        .captures(heading)
        .and_then(|caps| Color::parse(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_single_and_range() {
        assert_eq!(
            extract_location("Highlight - Location 210").as_deref(),
            Some("210")
        );
        assert_eq!(
            extract_location("Note - Page 14 · Location 210-212").as_deref(),
            Some("210-212")
        );
    }

    #[test]
    fn location_keyword_case_insensitive() {
        assert_eq!(
            extract_location("highlight at LOCATION 99").as_deref(),
            Some("99")
        );
    }

    #[test]
    fn page_numeric_range_and_roman() {
        assert_eq!(extract_page("Highlight - Page 14").as_deref(), Some("14"));
        assert_eq!(
            extract_page("Highlight - Page 123-125").as_deref(),
            Some("123-125")
        );
        assert_eq!(extract_page("Highlight - Page ix").as_deref(), Some("ix"));
    }

    #[test]
    fn page_does_not_match_location() {
        assert_eq!(extract_page("Highlight - Location 210"), None);
        assert_eq!(extract_location("Highlight - Page 14"), None);
    }

    #[test]
    fn color_canonical_casing() {
        assert_eq!(
            extract_color("Highlight (YELLOW) - Page 3"),
            Some(Color::Yellow)
        );
        assert_eq!(
            extract_color("Highlight ( pink ) - Location 5"),
            Some(Color::Pink)
        );
    }

    #[test]
    fn color_requires_parentheses() {
        assert_eq!(extract_color("a yellow highlight"), None);
    }

    #[test]
    fn absent_fields_are_none() {
        assert_eq!(extract_location("Note"), None);
        assert_eq!(extract_page("Note"), None);
        assert_eq!(extract_color("Note"), None);
    }
}
