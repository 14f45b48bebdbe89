//! Standalone preview document composer.
//!
//! Wraps a rendered HTML fragment in a full page with a statistics banner
//! and copy-to-clipboard sections, so the result can be opened in a browser
//! and pasted into the target editor section by section. The page chrome
//! lives in an embedded template; it contributes no conversion logic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stats::text_stats;

static FIRST_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h1[^>]*>.*?</h1>").unwrap());

/// Page shell with `{{…}}` placeholders for the computed parts.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Article Preview</title>
  <style>
    * { box-sizing: border-box; }
    body {
      max-width: 700px;
      margin: 0 auto;
      padding: 20px;
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
      background: #f5f5f5;
    }
    .stats {
      background: #1d4ed8;
      color: white;
      padding: 12px 20px;
      border-radius: 8px 8px 0 0;
      display: flex;
      justify-content: space-between;
      align-items: center;
      font-size: 14px;
    }
    .stats-item { display: flex; gap: 20px; }
    .stats span { opacity: 0.9; }
    .stats strong { font-size: 18px; margin-left: 4px; }
    .section {
      background: white;
      margin-bottom: 16px;
      border-radius: 8px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
      overflow: hidden;
    }
    .section:first-of-type { border-radius: 0 0 8px 8px; margin-top: 0; }
    .section-header {
      background: #f8fafc;
      padding: 10px 16px;
      border-bottom: 1px solid #e2e8f0;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }
    .section-title { font-size: 13px; color: #64748b; font-weight: 500; }
    .copy-btn {
      background: #1d4ed8;
      color: white;
      border: none;
      padding: 6px 14px;
      border-radius: 4px;
      cursor: pointer;
      font-size: 13px;
      transition: background 0.2s;
    }
    .copy-btn:hover { background: #1e40af; }
    .copy-btn.copied { background: #16a34a; }
    .section-content { padding: 20px; }
    .title-content h1 { margin: 0; }
  </style>
</head>
<body>
  <div class="stats">
    <div class="stats-item">
      <span>Words<strong>{{WORDS}}</strong></span>
      <span>Characters<strong>{{CHARS}}</strong></span>
      <span>No spaces<strong>{{CHARS_NO_SPACE}}</strong></span>
    </div>
    <span style="opacity:0.7">Article preview</span>
  </div>

  <div class="section">
    <div class="section-header">
      <span class="section-title">Full text</span>
      <button class="copy-btn" onclick="copyContent('full-content', this)" style="background:#059669;">Copy all</button>
    </div>
    <div class="section-content" id="full-content">
{{TITLE}}
{{BODY}}
    </div>
  </div>

  <div class="section">
    <div class="section-header">
      <span class="section-title">Title</span>
      <button class="copy-btn" onclick="copyContent('title-content', this)">Copy title</button>
    </div>
    <div class="section-content title-content" id="title-content">
{{TITLE}}
    </div>
  </div>

  <div class="section">
    <div class="section-header">
      <span class="section-title">Body</span>
      <button class="copy-btn" onclick="copyContent('body-content', this)">Copy body</button>
    </div>
    <div class="section-content" id="body-content">
{{BODY}}
    </div>
  </div>

  <script>
    function copyContent(id, btn) {
      const element = document.getElementById(id);
      const range = document.createRange();
      range.selectNodeContents(element);
      const selection = window.getSelection();
      selection.removeAllRanges();
      selection.addRange(range);

      try {
        document.execCommand('copy');
        btn.textContent = 'Copied!';
        btn.classList.add('copied');
        setTimeout(() => {
          const btnTexts = {'title-content': 'Copy title', 'body-content': 'Copy body', 'full-content': 'Copy all'};
          btn.textContent = btnTexts[id] || 'Copy';
          btn.classList.remove('copied');
        }, 2000);
      } catch (err) {
        alert('Copy failed, please select and copy manually');
      }

      selection.removeAllRanges();
    }
  </script>
</body>
</html>"#;

/// Compose a standalone preview page from a rendered fragment and the raw
/// Markdown it came from.
///
/// The first `<h1>` element, if any, becomes the title section; the rest of
/// the fragment is the body. Statistics are computed from the raw Markdown
/// and never alter the fragment itself.
pub fn compose_preview_document(fragment: &str, markdown: &str) -> String {
    let (title, body) = split_title(fragment);
    let stats = text_stats(markdown);

    PAGE_TEMPLATE
        .replace("{{WORDS}}", &stats.words.to_string())
        .replace("{{CHARS}}", &stats.chars.to_string())
        .replace("{{CHARS_NO_SPACE}}", &stats.chars_no_whitespace.to_string())
        .replace("{{TITLE}}", &title)
        .replace("{{BODY}}", &body)
}

/// Split a fragment into its leading `<h1>` element and the remainder.
fn split_title(fragment: &str) -> (String, String) {
    match FIRST_H1.find(fragment) {
        Some(m) => {
            let title = m.as_str().to_string();
            let body = fragment.replacen(m.as_str(), "", 1).trim().to_string();
            (title, body)
        }
        None => (String::new(), fragment.to_string()),
    }
}
