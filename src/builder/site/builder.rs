use std::io::Write;
use std::path::PathBuf;
use log::{info, debug};

use crate::config::{Config, TemplateSource};
use crate::builder::page::{collect_files, sort_by_mod_time, FileRecord, Page};
use crate::layout::LayoutRenderer;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{MdpError, MdpResult};
use crate::utils::{fs, path};

/// Convert every matched Markdown file to HTML.
///
/// Files are processed one at a time, oldest first. As each output file
/// is written its absolute path is reported to `out` on its own line. The
/// first error stops the run; files already written stay on disk.
pub fn build_site<W: Write>(config: &Config, out: &mut W) -> MdpResult<Vec<PathBuf>> {
    let layout = resolve_template(config)?;
    let layout_renderer = LayoutRenderer::new(layout)?;
    let markdown = MarkdownRenderer::new();

    let mut records = collect_files(&config.input)?;
    sort_by_mod_time(&mut records);
    info!("Converting {} files into {}", records.len(), config.output.display());

    let mut written = Vec::with_capacity(records.len());
    for record in &records {
        let output = convert_file(config, record, &markdown, &layout_renderer)?;

        writeln!(out, "{}", output.display())
            .and_then(|_| out.flush())
            .map_err(|source| MdpError::Write { path: PathBuf::from("<stdout>"), source })?;
        written.push(output);
    }

    Ok(written)
}

/// Read the layout text: the built-in default, or a file read once per run
fn resolve_template(config: &Config) -> MdpResult<String> {
    match config.template_source() {
        TemplateSource::Inline(layout) => Ok(layout),
        TemplateSource::File(path) => {
            debug!("Reading template {}", path.display());
            fs::read_template(&path)
        }
    }
}

/// Read, render, template and write a single source file. Returns the
/// absolute path of the output file.
fn convert_file(
    config: &Config,
    record: &FileRecord,
    markdown: &MarkdownRenderer,
    layout_renderer: &LayoutRenderer,
) -> MdpResult<PathBuf> {
    debug!("Processing {}", record.path.display());

    let source = fs::read_source(&record.path)?;
    let page = Page::compose(record, markdown.render(&source), &config.author);

    let stem = record.stem();
    let output = path::output_path_for(&config.output, &stem);
    let html = layout_renderer.apply(&format!("{}.html", stem), &page)?;

    fs::write_output(&output, &html, record.mod_time)?;
    path::absolute(&output)
}
