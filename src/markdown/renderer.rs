use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Renders Markdown source text to HTML
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer for the CommonMark dialect
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
        }
    }

    /// Render Markdown content to HTML
    pub fn render(&self, content: &str) -> String {
        render_markdown(content, &self.options)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
