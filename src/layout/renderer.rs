use liquid::Parser;
use log::debug;

use crate::builder::page::Page;
use crate::liquid::{compile, create_parser, page_globals, render, Escaping};
use crate::utils::error::{MdpResult, TemplatePass};

/// Applies a layout to pages in two passes.
///
/// The base pass renders the layout with raw page values, so the body
/// lands as HTML. Its output is then compiled again and rendered with
/// HTML-escaped values, which expands any template expressions that came
/// in with the body. Templates are compiled fresh for every page.
pub struct LayoutRenderer {
    /// Layout source text
    layout: String,

    /// Liquid parser
    parser: Parser,
}

impl LayoutRenderer {
    /// Create a renderer for the given layout text
    pub fn new(layout: String) -> MdpResult<Self> {
        let parser = create_parser()?;
        Ok(LayoutRenderer { layout, parser })
    }

    /// Render `page` through both passes. `name` identifies the page in
    /// diagnostics only.
    pub fn apply(&self, name: &str, page: &Page) -> MdpResult<String> {
        let base_name = format!("{}-base", name);
        let base = compile(&self.parser, &base_name, TemplatePass::Base, &self.layout)?;
        let intermediate = render(&base, &base_name, &page_globals(page, Escaping::Raw))?;
        debug!("Base pass for {} produced {} bytes", name, intermediate.len());

        let final_name = format!("{}-final", name);
        let last = compile(&self.parser, &final_name, TemplatePass::Final, &intermediate)?;
        render(&last, &final_name, &page_globals(page, Escaping::Html))
    }
}
