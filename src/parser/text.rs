/// Entities the export templates actually use. Decoded in table order;
/// `&amp;` must stay last so encoded ampersands don't double-decode.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Strip markup tags, decode entities, collapse whitespace.
///
/// Every `<...>` run becomes a single space (no nesting awareness; an
/// unterminated `<` swallows the rest of the string). Any input is valid.
pub fn normalize(fragment: &str) -> String {
    let mut stripped = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => {
                if !in_tag {
                    stripped.push(' ');
                }
                in_tag = true;
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    let mut decoded = stripped;
    for (entity, replacement) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }

    let mut out = String::with_capacity(decoded.len());
    let mut last_space = true;
    for ch in decoded.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
