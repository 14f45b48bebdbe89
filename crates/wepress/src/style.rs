//! Style configuration for the inline-style renderer.

/// Maps semantic roles to CSS values.
///
/// Every value ends up inside a `style="…"` attribute on the generated
/// elements; there are no classes and no external stylesheet, so this is the
/// complete presentational vocabulary of the output.
///
/// The configuration is read-only for the duration of a conversion. Callers
/// that want a different look construct their own value and pass it to
/// [`WepressService::with_style`](crate::WepressService::with_style).
///
/// Note: the final cleanup pass strips every literal `*` from the output, so
/// style values must never contain an asterisk.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Heading color, also used for the blockquote accent border.
    pub heading_color: String,

    /// Color applied to bold text.
    pub bold_color: String,

    /// Body text color.
    pub text_color: String,

    /// Body font size.
    pub font_size: String,

    /// Body line height.
    pub line_height: String,

    /// Bottom margin between reflowed paragraphs.
    pub paragraph_margin: String,

    /// Font size for level-1 headings.
    pub h1_size: String,

    /// Font size for level-2 headings.
    pub h2_size: String,

    /// Font size for level-3 headings.
    pub h3_size: String,

    /// Anchor color.
    pub link_color: String,

    /// Blockquote text color.
    pub quote_color: String,

    /// Horizontal divider color.
    pub divider_color: String,

    /// Background for code blocks and inline code spans.
    pub code_background: String,

    /// Monospace font stack for code.
    pub code_font: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            heading_color: "#1d4ed8".to_string(),
            bold_color: "#60a5fa".to_string(),
            text_color: "#333333".to_string(),
            font_size: "16px".to_string(),
            line_height: "1.8".to_string(),
            paragraph_margin: "1.5em".to_string(),
            h1_size: "24px".to_string(),
            h2_size: "20px".to_string(),
            h3_size: "18px".to_string(),
            link_color: "#3b82f6".to_string(),
            quote_color: "#666".to_string(),
            divider_color: "#e0e0e0".to_string(),
            code_background: "#f5f5f5".to_string(),
            code_font: "Consolas,Monaco,monospace".to_string(),
        }
    }
}

impl StyleConfig {
    /// Font size for the given heading level (1..=3).
    pub fn heading_size(&self, level: u8) -> &str {
        match level {
            1 => &self.h1_size,
            2 => &self.h2_size,
            _ => &self.h3_size,
        }
    }

    /// Style string for a body paragraph with the given bottom margin.
    ///
    /// Used both by the list-flattening rules (fixed `0.8em` margin) and by
    /// the paragraph reflow (configured paragraph margin).
    pub fn paragraph_css(&self, bottom_margin: &str) -> String {
        format!(
            "color:{}; font-size:{}; line-height:{}; margin:0 0 {} 0; text-align:justify;",
            self.text_color, self.font_size, self.line_height, bottom_margin
        )
    }
}
