//! Word and character statistics for the preview banner.
//!
//! Counts are computed from the raw Markdown after stripping syntax markers,
//! so they describe the prose the reader will see rather than the source.
//! They are descriptive metadata only and never feed back into rendering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::is_cjk;

static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s+").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-*+] ").unwrap());
static NUMBER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. ").unwrap());
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static LATIN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// Character and word counts for a Markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Total characters after syntax stripping.
    pub chars: usize,
    /// Characters excluding whitespace.
    pub chars_no_whitespace: usize,
    /// CJK ideographs (each counts as one word).
    pub cjk_chars: usize,
    /// Contiguous Latin-letter runs (each counts as one word).
    pub latin_words: usize,
    /// Combined word count: `cjk_chars + latin_words`.
    pub words: usize,
}

/// Compute statistics from raw Markdown.
pub fn text_stats(markdown: &str) -> TextStats {
    let plain = strip_syntax(markdown);

    let chars = plain.chars().count();
    let chars_no_whitespace = plain.chars().filter(|c| !c.is_whitespace()).count();
    let cjk_chars = plain.chars().filter(|&c| is_cjk(c)).count();
    let latin_words = LATIN_RUN.find_iter(&plain).count();

    TextStats {
        chars,
        chars_no_whitespace,
        cjk_chars,
        latin_words,
        words: cjk_chars + latin_words,
    }
}

/// Reduce Markdown to the prose the reader will see: heading and list
/// markers dropped, emphasis and link syntax unwrapped, newline runs
/// collapsed.
fn strip_syntax(markdown: &str) -> String {
    let text = HEADING_MARKER.replace_all(markdown, "");
    let text = BOLD.replace_all(&text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    let text = LINK.replace_all(&text, "${1}");
    let text = BULLET_MARKER.replace_all(&text, "");
    let text = NUMBER_MARKER.replace_all(&text, "");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}
