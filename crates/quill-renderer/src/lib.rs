//! Markdown to HTML conversion for quill.
//!
//! The pipeline treats markdown conversion as a black-box capability: raw
//! body text in, rendered markup out. This crate is that seam, backed by
//! `pulldown-cmark`. Keeping it as a separate crate keeps the converter
//! swappable without touching the content pipeline.
//!
//! # Example
//!
//! ```
//! use quill_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render("**Bold** text");
//! assert!(html.contains("<strong>Bold</strong>"));
//! ```

use pulldown_cmark::{Options, Parser, html};

/// Markdown renderer with GFM enabled by default.
///
/// Conversion semantics are owned entirely by the underlying engine; this
/// type only configures parser options and drives the HTML writer.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// When enabled, the parser supports tables, strikethrough
    /// (`~~text~~`), and task lists (`- [ ] item`).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to an HTML string.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut output = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_paragraph() {
        let html = MarkdownRenderer::new().render("hello");

        assert_eq!(html, "<p>hello</p>\n");
    }

    #[test]
    fn test_render_heading_and_emphasis() {
        let html = MarkdownRenderer::new().render("# Title\n\n*em*");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>em</em>"));
    }

    #[test]
    fn test_render_gfm_table() {
        let html = MarkdownRenderer::new().render("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_without_gfm_ignores_strikethrough() {
        let renderer = MarkdownRenderer::new().with_gfm(false);

        let html = renderer.render("~~gone~~");

        assert!(!html.contains("<del>"));
    }

    #[test]
    fn test_render_empty_input() {
        let html = MarkdownRenderer::new().render("");

        assert_eq!(html, "");
    }
}
