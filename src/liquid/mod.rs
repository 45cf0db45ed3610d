use liquid::{Object, Parser, ParserBuilder, Template};
use liquid::model::Value;
use log::debug;

use crate::builder::page::Page;
use crate::utils::error::{MdpError, MdpResult, TemplatePass};

/// How page values are bound into a template's globals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Values are inserted verbatim
    Raw,
    /// Values are HTML-encoded before insertion
    Html,
}

/// Create a Liquid parser with the standard filters and tags
pub fn create_parser() -> MdpResult<Parser> {
    ParserBuilder::with_stdlib()
        .build()
        .map_err(|e| MdpError::Config(format!("Failed to create Liquid parser: {}", e)))
}

/// Compile template text under `name` for the given pass
pub fn compile(parser: &Parser, name: &str, pass: TemplatePass, source: &str) -> MdpResult<Template> {
    debug!("Compiling {} template {}", pass, name);
    parser.parse(source).map_err(|e| MdpError::TemplateCompile {
        name: name.to_string(),
        pass,
        message: e.to_string(),
    })
}

/// Render a compiled template against `globals`
pub fn render(template: &Template, name: &str, globals: &Object) -> MdpResult<String> {
    template.render(globals).map_err(|e| MdpError::TemplateRender {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Build the template globals for a page
pub fn page_globals(page: &Page, escaping: Escaping) -> Object {
    let bind = |value: &str| -> Value {
        match escaping {
            Escaping::Raw => Value::scalar(value.to_string()),
            Escaping::Html => Value::scalar(html_escape::encode_safe(value).into_owned()),
        }
    };

    let mut obj = Object::new();
    obj.insert("body".into(), bind(&page.body));
    obj.insert("title".into(), bind(&page.title));
    obj.insert("unix_time".into(), bind(&page.unix_time));
    obj.insert("date".into(), bind(&page.date));
    obj.insert("author".into(), bind(&page.author));
    obj
}
