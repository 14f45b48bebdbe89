//! Utility functions and constants shared by the rendering pipeline.

/// Tag prefixes that mark a line as already block-level during reflow.
///
/// A line starting with one of these passes through unmodified and flushes
/// any pending paragraph buffer.
pub const BLOCK_START_PREFIXES: &[&str] = &[
    "<h", "<p", "<ul", "<ol", "<li", "<blockquote", "<hr", "<pre", "</",
];

/// Tag prefixes that exempt accumulated text from paragraph wrapping.
///
/// Broader than [`BLOCK_START_PREFIXES`]: a buffer that already begins with
/// any block-level element is emitted as-is, while inline elements
/// (`<strong>`, `<em>`, `<a>`, `<code>`) still get wrapped.
pub const NO_WRAP_PREFIXES: &[&str] = &[
    "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<ul", "<ol", "<li",
    "<blockquote", "<hr", "<pre", "<div", "<table",
];

/// Check whether a trimmed line begins with a block-level tag.
pub fn starts_with_block_tag(line: &str) -> bool {
    BLOCK_START_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Escape text for literal inclusion in HTML content.
///
/// Applied to code content only; generated markup is never re-escaped.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Check whether a character is a CJK ideograph (U+4E00..=U+9FA5).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}
