//! Markdown normalizer: cosmetic cleanup without semantic changes.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_AFTER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\n])\n(#{1,6} )").unwrap());
static TEXT_AFTER_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(#{1,6} .+)\n([^\n#])").unwrap());
static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6} ").unwrap());

/// Produce a cosmetically cleaned Markdown document.
///
/// Line endings are normalized to `\n`, every heading gets exactly one blank
/// line on each side, runs of blank lines collapse to one, leading/trailing
/// blank lines are trimmed, and the result ends with exactly one `\n`.
/// Inline and block syntax is never altered. Idempotent.
pub fn normalize_markdown(markdown: &str) -> String {
    let text = markdown.replace("\r\n", "\n");

    let text = HEADING_AFTER_TEXT.replace_all(&text, "${1}\n\n${2}");
    let text = TEXT_AFTER_HEADING.replace_all(&text, "${1}\n\n${2}");

    // Single pass: collapse blank-line runs and force a blank line before
    // any heading the regexes above missed (e.g. heading after heading).
    let mut lines: Vec<&str> = Vec::new();
    let mut prev_blank = true;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !prev_blank {
                lines.push("");
            }
            prev_blank = true;
        } else {
            if HEADING_LINE.is_match(trimmed) && !prev_blank {
                lines.push("");
            }
            lines.push(line);
            prev_blank = false;
        }
    }

    let mut result = lines.join("\n").trim().to_string();
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_crlf_normalized() {
        assert_eq!(normalize_markdown("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn test_blank_line_inserted_before_heading() {
        assert_eq!(normalize_markdown("text\n# Title"), "text\n\n# Title\n");
    }

    #[test]
    fn test_blank_line_inserted_after_heading() {
        assert_eq!(normalize_markdown("# Title\ntext"), "# Title\n\ntext\n");
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(normalize_markdown("a\n\n\n\nb"), "a\n\nb\n");
    }

    #[test]
    fn test_leading_and_trailing_blanks_trimmed() {
        assert_eq!(normalize_markdown("\n\ntext\n\n\n"), "text\n");
    }

    #[test]
    fn test_exactly_one_trailing_newline() {
        assert!(normalize_markdown("a").ends_with("a\n"));
        assert!(!normalize_markdown("a\n\n").ends_with("\n\n"));
    }

    #[test]
    fn test_heading_after_heading() {
        assert_eq!(
            normalize_markdown("# One\n## Two"),
            "# One\n\n## Two\n"
        );
    }

    #[test]
    fn test_inline_syntax_untouched() {
        let input = "some **bold** and `code` text\n";
        assert_eq!(normalize_markdown(input), input);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "# Title\ntext\nmore\n## Sub\n\n\nbody",
            "\r\n# A\r\nB\r\n",
            "plain paragraph only",
            "",
            "# 你好 World\n\nThis is **test**.",
        ];
        for input in inputs {
            let once = normalize_markdown(input);
            let twice = normalize_markdown(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
