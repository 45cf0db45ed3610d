use comrak::Options;

/// Create ComrakOptions for plain CommonMark: no syntax extensions,
/// raw HTML in the source passes through untouched
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Render options
    options.render.hardbreaks = false;
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}
