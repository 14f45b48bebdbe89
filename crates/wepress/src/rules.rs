//! Ordered rewrite passes for block and inline Markdown syntax.
//!
//! Each pass is a total, side-effect-free rewrite of the working text. The
//! order is a correctness contract:
//!
//! 1. images (removed)
//! 2. headings, level 3 before 2 before 1
//! 3. combined bold+italic (`***x***` / `___x___`)
//! 4. bold (`**x**` / `__x__`)
//! 5. italic (single `*x*` / `_x_`)
//! 6. links
//! 7. unordered list items (flattened to paragraphs)
//! 8. ordered list items (flattened to paragraphs)
//! 9. blockquote lines
//! 10. horizontal rules
//!
//! `***x***` is an ambiguous prefix of both the bold and italic patterns,
//! so the combined rule must win; heading levels nest the same way, deepest
//! first. Malformed syntax is left as literal text; no pass ever fails.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::style::StyleConfig;

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());

static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

static BOLD_ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"___(.+?)___").unwrap());
static BOLD_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());
static ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_\n]+?)_").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*+] (.+)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());
static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*_]{3,}$").unwrap());

/// Apply every rewrite pass, in order, to the working text.
pub fn rewrite(text: &str, style: &StyleConfig) -> String {
    let text = strip_images(text);
    let text = headings(&text, style);
    let text = emphasis(&text, style);
    let text = links(&text, style);
    let text = list_items(&text, style);
    let text = blockquotes(&text, style);
    horizontal_rules(&text, style)
}

/// Remove image syntax entirely; the target editor cannot embed remote
/// images, and the alt text is discarded with it.
fn strip_images(text: &str) -> String {
    IMAGE.replace_all(text, "").into_owned()
}

/// Convert ATX headings, deepest level first so `### x` is never claimed by
/// the `##` or `#` pattern.
fn headings(text: &str, style: &StyleConfig) -> String {
    let text = H3.replace_all(text, |caps: &Captures| heading_tag(3, &caps[1], style));
    let text = H2.replace_all(&text, |caps: &Captures| heading_tag(2, &caps[1], style));
    H1.replace_all(&text, |caps: &Captures| heading_tag(1, &caps[1], style))
        .into_owned()
}

fn heading_tag(level: u8, title: &str, style: &StyleConfig) -> String {
    let margin = match level {
        1 => "0 0 1em 0",
        2 => "1.5em 0 0.8em 0",
        _ => "1.2em 0 0.8em 0",
    };
    format!(
        "<h{level} style=\"color:{}; font-size:{}; font-weight:bold; margin:{margin}; \
         line-height:1.4;\">{}</h{level}>",
        style.heading_color,
        style.heading_size(level),
        title.trim()
    )
}

/// Convert emphasis, longest marker run first: `***x***` is an ambiguous
/// prefix of both the bold and italic patterns and must win.
fn emphasis(text: &str, style: &StyleConfig) -> String {
    let strong_em = |caps: &Captures| {
        format!(
            "<strong style=\"color:{};\"><em>{}</em></strong>",
            style.bold_color, &caps[1]
        )
    };
    let strong = |caps: &Captures| {
        format!("<strong style=\"color:{};\">{}</strong>", style.bold_color, &caps[1])
    };

    let text = BOLD_ITALIC_STAR.replace_all(text, strong_em);
    let text = BOLD_ITALIC_UNDER.replace_all(&text, strong_em);
    let text = BOLD_STAR.replace_all(&text, strong);
    let text = BOLD_UNDER.replace_all(&text, strong);
    let text = single_marker_emphasis(&text, &ITALIC_STAR, '*');
    single_marker_emphasis(&text, &ITALIC_UNDER, '_')
}

/// Italic with a single `*` or `_`: the delimiters must not be part of a
/// longer run of the same marker and the span must not cross a line.
///
/// The `regex` crate has no lookaround, so the adjacency constraint is
/// checked on the characters surrounding each candidate match; a rejected
/// candidate is rescanned from just past its opening marker, matching what
/// lookbehind-based matching would find.
fn single_marker_emphasis(text: &str, pattern: &Regex, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = pattern.captures(&text[pos..]) else {
            break;
        };
        let m = caps.get(0).unwrap();
        let (start, end) = (pos + m.start(), pos + m.end());

        let prev = text[..start].chars().next_back();
        let next = text[end..].chars().next();
        if prev == Some(marker) || next == Some(marker) {
            // The marker is ASCII, so start + 1 is a char boundary.
            out.push_str(&text[pos..=start]);
            pos = start + 1;
        } else {
            out.push_str(&text[pos..start]);
            out.push_str("<em>");
            out.push_str(caps.get(1).unwrap().as_str());
            out.push_str("</em>");
            pos = end;
        }
    }

    out.push_str(&text[pos..]);
    out
}

fn links(text: &str, style: &StyleConfig) -> String {
    LINK.replace_all(text, |caps: &Captures| {
        format!(
            "<a href=\"{}\" style=\"color:{}; text-decoration:none;\">{}</a>",
            &caps[2], style.link_color, &caps[1]
        )
    })
    .into_owned()
}

/// Flatten list items into plain styled paragraphs: no bullet, no numeral,
/// no nesting. List semantics are intentionally discarded.
fn list_items(text: &str, style: &StyleConfig) -> String {
    let item = |caps: &Captures| {
        format!(
            "<p style=\"{}\">{}</p>",
            style.paragraph_css("0.8em"),
            caps[1].trim()
        )
    };

    let text = UNORDERED_ITEM.replace_all(text, item);
    ORDERED_ITEM.replace_all(&text, item).into_owned()
}

fn blockquotes(text: &str, style: &StyleConfig) -> String {
    QUOTE_LINE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<blockquote style=\"border-left:4px solid {}; padding-left:1em; \
                 margin:1em 0; color:{}; font-style:italic;\">{}</blockquote>",
                style.heading_color,
                style.quote_color,
                caps[1].trim()
            )
        })
        .into_owned()
}

fn horizontal_rules(text: &str, style: &StyleConfig) -> String {
    HORIZONTAL_RULE
        .replace_all(
            text,
            format!(
                "<hr style=\"border:none; border-top:1px solid {}; margin:2em 0;\">",
                style.divider_color
            )
            .as_str(),
        )
        .into_owned()
}
