//! # wepress
//!
//! Convert Markdown to inline-styled HTML for paste-based publishing
//! editors.
//!
//! Rich-text editors like the WeChat official-account editor strip classes
//! and external stylesheets on paste, so all presentation has to live in
//! per-element `style` attributes. This crate converts Markdown into such a
//! fragment, produces a cleaned-up Markdown document, and can wrap the
//! fragment in a standalone preview page with word-count statistics and
//! copy-to-clipboard controls.
//!
//! ## Design
//!
//! The renderer is an ordered sequence of pure string rewrites over one
//! working buffer: code regions are lifted out behind sentinel tokens,
//! block and inline syntax is rewritten in a fixed order, code is restored,
//! plain lines are reflowed into paragraphs, and a final cleanup pass runs.
//! There is no AST; the contract is string in, string out, and every entry
//! point is total — malformed Markdown degrades to literal text instead of
//! failing.
//!
//! ## Example
//!
//! ```rust
//! use wepress::WepressService;
//!
//! let service = WepressService::new();
//! let html = service.render_inline_html("# Hello\n\nSome **bold** text.");
//! assert!(html.contains("<h1 style="));
//! assert!(html.contains("<strong style="));
//! ```
//!
//! ## Custom styles
//!
//! ```rust
//! use wepress::{StyleConfig, WepressService};
//!
//! let style = StyleConfig {
//!     heading_color: "#0f766e".to_string(),
//!     ..StyleConfig::default()
//! };
//! let service = WepressService::with_style(style);
//! assert!(service.render_inline_html("# T").contains("#0f766e"));
//! ```

mod normalize;
mod preview;
mod protect;
mod reflow;
mod rules;
mod service;
mod stats;
mod style;
mod utilities;

pub use normalize::normalize_markdown;
pub use preview::compose_preview_document;
pub use service::WepressService;
pub use stats::{text_stats, TextStats};
pub use style::StyleConfig;
pub use utilities::escape_html;
