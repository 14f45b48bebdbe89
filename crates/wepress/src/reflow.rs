//! Paragraph reflow: regroup consecutive plain lines into styled paragraphs.

use crate::style::StyleConfig;
use crate::utilities::{starts_with_block_tag, NO_WRAP_PREFIXES};

/// Walk the transformed text line by line, wrapping runs of plain lines in
/// a single paragraph element.
///
/// Lines that already start with a block-level tag pass through unmodified,
/// flushing any pending buffer first; a blank line flushes too. Lines inside
/// one paragraph are joined with `<br>`. A multi-line `<pre>` element is
/// carried through as a single block with its interior lines verbatim, so
/// restored code is never re-wrapped. The emitted blocks are separated by
/// blank lines.
pub fn reflow(text: &str, style: &StyleConfig) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut blocks, &mut paragraph, style);
            continue;
        }

        // A preformatted block spans until its closing tag; its interior
        // lines keep their indentation and never enter a paragraph.
        if trimmed.starts_with("<pre") && !trimmed.contains("</pre>") {
            flush(&mut blocks, &mut paragraph, style);
            let mut block = trimmed.to_string();
            for inner in lines.by_ref() {
                block.push('\n');
                block.push_str(inner);
                if inner.contains("</pre>") {
                    break;
                }
            }
            blocks.push(block);
            continue;
        }

        if starts_with_block_tag(trimmed) {
            flush(&mut blocks, &mut paragraph, style);
            blocks.push(trimmed.to_string());
        } else {
            paragraph.push(trimmed);
        }
    }

    flush(&mut blocks, &mut paragraph, style);

    blocks.join("\n\n")
}

fn flush(blocks: &mut Vec<String>, paragraph: &mut Vec<&str>, style: &StyleConfig) {
    if paragraph.is_empty() {
        return;
    }
    let wrapped = wrap_paragraph(&paragraph.join("<br>"), style);
    if !wrapped.is_empty() {
        blocks.push(wrapped);
    }
    paragraph.clear();
}

/// Wrap accumulated text in a styled paragraph element.
///
/// Text that already begins with a block-level fragment is returned
/// unchanged; inline fragments (`<strong>`, `<em>`, `<a>`, `<code>`) still
/// get wrapped.
fn wrap_paragraph(text: &str, style: &StyleConfig) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if NO_WRAP_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return text.to_string();
    }
    format!(
        "<p style=\"{}\">{}</p>",
        style.paragraph_css(&style.paragraph_margin),
        text
    )
}
