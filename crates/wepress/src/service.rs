//! WepressService - the main entry point for Markdown conversion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::style::StyleConfig;
use crate::{normalize, preview, protect, reflow, rules};

static HEADING_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(<h[1-3][^>]*>)").unwrap());
static HEADING_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(</h[1-3]>)").unwrap());

/// The main service for converting Markdown to inline-styled HTML.
///
/// Each conversion is a pure function of the input text and the style
/// configuration; the service holds no mutable state, so independent
/// conversions may run in parallel without coordination.
pub struct WepressService {
    style: StyleConfig,
}

impl WepressService {
    /// Create a service with the default style configuration.
    pub fn new() -> Self {
        Self {
            style: StyleConfig::default(),
        }
    }

    /// Create a service with a custom style configuration.
    pub fn with_style(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Get the current style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Convert Markdown to an HTML fragment styled entirely with inline
    /// attributes. Total over any input; malformed syntax degrades to
    /// literal text instead of failing.
    ///
    /// Pipeline order matters: code regions are protected before any
    /// pattern-based pass runs, the lossy marker cleanup runs while they
    /// are still protected (so code content survives byte-for-byte), and
    /// restoration happens before reflow so `<pre>` lines are recognized
    /// as block starts.
    pub fn render_inline_html(&self, markdown: &str) -> String {
        let (working, regions) = protect::extract(markdown);
        let rewritten = rules::rewrite(&working, &self.style);
        let cleaned = strip_stray_markers(&rewritten);
        let restored = regions.restore(&cleaned, &self.style);
        let reflowed = reflow::reflow(&restored, &self.style);
        space_headings(&reflowed)
    }

    /// Reformat Markdown without changing its semantics.
    /// See [`normalize::normalize_markdown`].
    pub fn normalize_markdown(&self, markdown: &str) -> String {
        normalize::normalize_markdown(markdown)
    }

    /// Wrap a rendered fragment in a standalone preview document.
    /// See [`preview::compose_preview_document`].
    pub fn compose_preview(&self, fragment: &str, markdown: &str) -> String {
        preview::compose_preview_document(fragment, markdown)
    }
}

impl Default for WepressService {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace fullwidth corner brackets with plain double quotes and strip
/// every remaining literal asterisk.
///
/// The asterisk strip is deliberately lossy and global, the safety net for
/// stray unmatched emphasis markers. It runs while code regions are still
/// sentinel tokens, so code content is never touched; generated tag
/// attributes are included, which is safe only because style values never
/// contain `*` (checked by a test in `style`).
fn strip_stray_markers(html: &str) -> String {
    html.replace(['「', '」'], "\"").replace('*', "")
}

/// Inject a newline before each heading open tag and after each heading
/// close tag, for visual separation in the final text.
fn space_headings(html: &str) -> String {
    let spaced = HEADING_OPEN.replace_all(html, "\n${1}");
    HEADING_CLOSE.replace_all(&spaced, "${1}\n").into_owned()
}
