//! End-to-end tests for the conversion pipeline.

use pretty_assertions::assert_eq;
use wepress::{compose_preview_document, normalize_markdown, text_stats, WepressService};

#[test]
fn heading_paragraph_and_code_block_in_order() {
    let service = WepressService::new();
    let input = "# Title\n\nSome **bold** text.\n\n```rust\nlet x = 1;\n```";
    let html = service.render_inline_html(input);

    let blocks: Vec<&str> = html
        .split('\n')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect();

    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("<h1 style="));
    assert!(blocks[1].starts_with("<p style="));
    assert!(blocks[1].contains("<strong style="));
    assert!(blocks[2].starts_with("<pre style="));
    assert!(blocks[2].contains("let x = 1;"));
}

#[test]
fn inline_code_content_is_preserved_literally() {
    let service = WepressService::new();
    let html = service.render_inline_html("run `a*b*c` now");
    assert!(html.contains("a*b*c"));
    assert!(!html.contains("a<em>b</em>c"));
}

#[test]
fn fenced_block_content_escapes_html_and_skips_rules() {
    let service = WepressService::new();
    let html = service.render_inline_html("```\n# not a heading\n<b>**raw**</b>\n```");
    assert!(html.contains("# not a heading"));
    assert!(html.contains("&lt;b&gt;**raw**&lt;/b&gt;"));
    assert_eq!(html.matches("<h1").count(), 0);
    assert_eq!(html.matches("<strong").count(), 0);
}

#[test]
fn heading_followed_by_text_wraps_text_separately() {
    let service = WepressService::new();
    let html = service.render_inline_html("## A\nimmediately following text");
    assert!(html.contains("<h2 style="));
    assert!(html.contains("<p style="));
    assert!(html.contains("immediately following text"));
    // The paragraph is not nested inside the heading element.
    let h2_close = html.find("</h2>").unwrap();
    let p_open = html.find("<p style=").unwrap();
    assert!(h2_close < p_open);
}

#[test]
fn combined_emphasis_never_splits() {
    let service = WepressService::new();
    let html = service.render_inline_html("***bold italic***");
    assert_eq!(html.matches("<strong").count(), 1);
    assert_eq!(html.matches("<em>").count(), 1);
    assert!(html.contains("<strong style=\"color:#60a5fa;\"><em>bold italic</em></strong>"));
}

#[test]
fn images_vanish_but_links_stay() {
    let service = WepressService::new();

    let image = service.render_inline_html("![alt](x.png)");
    assert!(!image.contains("<a"));
    assert!(!image.contains("<img"));
    assert!(!image.contains("alt"));

    let link = service.render_inline_html("[text](url)");
    assert!(link.contains(r#"href="url""#));
    assert!(link.contains(">text</a>"));
}

#[test]
fn stray_asterisk_is_cleaned_up() {
    let service = WepressService::new();
    let html = service.render_inline_html("2 * 3 = 6");
    assert!(!html.contains('*'));
}

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "# Title\r\nbody\r\nmore\r\n### Sub\n\n\n\ntail",
        "no headings at all\njust lines",
        "# 你好 World\n\nThis is **test**.",
        "",
    ];
    for input in inputs {
        let once = normalize_markdown(input);
        assert_eq!(once, normalize_markdown(&once), "input: {input:?}");
    }
}

#[test]
fn word_count_scenario() {
    let stats = text_stats("# 你好 World\n\nThis is **test**.");
    assert_eq!(stats.cjk_chars, 2);
    assert!(stats.latin_words >= 3);
    assert!(stats.chars_no_whitespace > 0);
}

#[test]
fn preview_wraps_fragment_without_altering_it() {
    let service = WepressService::new();
    let markdown = "# Title\n\nBody text here.";
    let fragment = service.render_inline_html(markdown);
    let document = compose_preview_document(&fragment, markdown);

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("Body text here."));
    // Rendering again with stats computed must give the same fragment.
    assert_eq!(fragment, service.render_inline_html(markdown));
}

#[test]
fn parallel_conversions_share_nothing() {
    let inputs: Vec<String> = (0..8).map(|i| format!("# Doc {i}\n\nBody {i}.")).collect();

    let sequential: Vec<String> = inputs
        .iter()
        .map(|md| WepressService::new().render_inline_html(md))
        .collect();

    let handles: Vec<_> = inputs
        .iter()
        .cloned()
        .map(|md| std::thread::spawn(move || WepressService::new().render_inline_html(&md)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(sequential) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn blockquote_and_divider_render_as_blocks() {
    let service = WepressService::new();
    let html = service.render_inline_html("> quoted line\n\n---\n\nafter");
    assert!(html.contains("<blockquote style="));
    assert!(html.contains("<hr style="));
    assert!(html.contains("after"));
}

#[test]
fn list_items_flatten_to_paragraphs() {
    let service = WepressService::new();
    let html = service.render_inline_html("- one\n- two\n\n1. three");
    assert!(!html.contains("<ul"));
    assert!(!html.contains("<ol"));
    assert!(!html.contains("<li"));
    assert_eq!(html.matches("<p style=").count(), 3);
}
