//! Markdown reference documentation for schema documents.
//!
//! The renderer only looks at the schema document, so it works the same on
//! schemas synthesized by [`crate::schema`] and on any other document using
//! the same subset of JSON Schema.
//!
//! Generated Markdown needs these Python-Markdown / PyMdown extensions:
//! definition lists, admonitions, details and superfences.

mod markdown;


pub use markdown::{MarkdownRenderer, render_markdown};

/// Options controlling the rendered Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render property titles as HTML badges (name, "Required" tag, type)
    /// instead of plain `name (required)` text.
    pub enhanced_titles: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enhanced_titles: true,
        }
    }
}
