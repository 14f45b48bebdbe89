//! Protected-region handling for code blocks and inline code spans.
//!
//! Code content must survive the rewrite passes untouched, so it is pulled
//! out of the working text up front and swapped for sentinel tokens that no
//! rewrite rule can match. After all pattern-based transformations have run,
//! [`CodeRegions::restore`] substitutes each sentinel exactly once, in index
//! order, with the rendered monospace element.
//!
//! The sentinel encoding is a NUL-delimited tag (`\u{0}CODEBLOCK3\u{0}`):
//! the NUL byte never occurs in legitimate Markdown and is never produced by
//! any rewrite rule, so the tokens cannot collide with document text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::style::StyleConfig;
use crate::utilities::escape_html;

// Fenced blocks must be extracted before inline spans; a fenced block that
// contains single backticks would otherwise be chewed up by the span pattern.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"```[\s\S]*?```").unwrap());
static INLINE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

// Splits an extracted fenced block into its language tag and inner content.
// The language tag is a parsing hint only; it is discarded from the output.
static FENCE_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A```(\w*)\n?(.*?)```\z").unwrap());

/// Ordered table of literal regions lifted out of the working text.
#[derive(Debug, Default)]
pub struct CodeRegions {
    /// Full fenced blocks, fences included, indexed by extraction order.
    blocks: Vec<String>,
    /// Inner text of inline code spans, indexed by extraction order.
    spans: Vec<String>,
}

impl CodeRegions {
    /// Re-insert every extracted region, rendering code as inline-styled
    /// monospace elements with HTML-escaped content.
    pub fn restore(&self, html: &str, style: &StyleConfig) -> String {
        let mut out = html.to_string();

        for (i, block) in self.blocks.iter().enumerate() {
            let token = block_token(i);
            out = out.replacen(&token, &render_fenced_block(block, style), 1);
        }

        for (i, code) in self.spans.iter().enumerate() {
            let token = span_token(i);
            out = out.replacen(&token, &render_inline_span(code, style), 1);
        }

        out
    }
}

/// Replace fenced code blocks and inline code spans with sentinel tokens.
///
/// Returns the working text plus the ordered region table needed to restore
/// the content later.
pub fn extract(text: &str) -> (String, CodeRegions) {
    let mut regions = CodeRegions::default();

    let working = FENCED_BLOCK.replace_all(text, |caps: &regex::Captures| {
        regions.blocks.push(caps[0].to_string());
        block_token(regions.blocks.len() - 1)
    });

    let working = INLINE_SPAN.replace_all(&working, |caps: &regex::Captures| {
        regions.spans.push(caps[1].to_string());
        span_token(regions.spans.len() - 1)
    });

    (working.into_owned(), regions)
}

fn block_token(index: usize) -> String {
    format!("\u{0}CODEBLOCK{index}\u{0}")
}

fn span_token(index: usize) -> String {
    format!("\u{0}INLINECODE{index}\u{0}")
}

fn render_fenced_block(block: &str, style: &StyleConfig) -> String {
    // The extracted block always carries both fences, so the parts pattern
    // matches; fall back to escaping the raw text if it somehow does not.
    let content = match FENCE_PARTS.captures(block) {
        Some(caps) => caps[2].trim().to_string(),
        None => block.trim().to_string(),
    };

    format!(
        "<pre style=\"background:{}; padding:1em; border-radius:4px; overflow-x:auto; \
         font-family:{}; font-size:14px; line-height:1.5; margin:1em 0;\"><code>{}</code></pre>",
        style.code_background,
        style.code_font,
        escape_html(&content)
    )
}

fn render_inline_span(code: &str, style: &StyleConfig) -> String {
    format!(
        "<code style=\"background:{}; padding:0.2em 0.4em; border-radius:3px; \
         font-family:{}; font-size:0.9em;\">{}</code>",
        style.code_background,
        style.code_font,
        escape_html(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_block() {
        let (working, regions) = extract("before\n```rust\nlet x = 1;\n```\nafter");
        assert_eq!(working, "before\n\u{0}CODEBLOCK0\u{0}\nafter");
        assert_eq!(regions.blocks.len(), 1);
    }

    #[test]
    fn test_extract_inline_span() {
        let (working, regions) = extract("use `foo()` here");
        assert_eq!(working, "use \u{0}INLINECODE0\u{0} here");
        assert_eq!(regions.spans, vec!["foo()"]);
    }

    #[test]
    fn test_fenced_block_protects_inner_backticks() {
        // The single backticks inside the fence must not be matched as an
        // inline span.
        let (working, regions) = extract("```\nuse `tick` inside\n```");
        assert_eq!(regions.blocks.len(), 1);
        assert_eq!(regions.spans.len(), 0);
        assert!(!working.contains('`'));
    }

    #[test]
    fn test_two_fenced_blocks_do_not_merge() {
        let input = "```\na\n```\nmiddle\n```\nb\n```";
        let (working, regions) = extract(input);
        assert_eq!(regions.blocks.len(), 2);
        assert!(working.contains("middle"));
    }

    #[test]
    fn test_restore_escapes_content() {
        let style = StyleConfig::default();
        let (working, regions) = extract("`a<b>`");
        let restored = regions.restore(&working, &style);
        assert!(restored.contains("a&lt;b&gt;"));
        assert!(restored.starts_with("<code style="));
    }

    #[test]
    fn test_restore_discards_language_tag() {
        let style = StyleConfig::default();
        let (working, regions) = extract("```rust\nfn main() {}\n```");
        let restored = regions.restore(&working, &style);
        assert!(restored.contains("fn main() {}"));
        assert!(!restored.contains("rust"));
    }

    #[test]
    fn test_restore_preserves_markdown_in_code() {
        let style = StyleConfig::default();
        let (working, regions) = extract("`a*b*c`");
        let restored = regions.restore(&working, &style);
        assert!(restored.contains("a*b*c"));
    }

    #[test]
    fn test_unterminated_fence_left_alone() {
        let (working, regions) = extract("```\nno closing fence");
        assert!(regions.blocks.is_empty());
        // The dangling fence stays literal (and its backticks are not a
        // valid inline span either, since spans exclude backticks).
        assert_eq!(working, "```\nno closing fence");
    }
}
