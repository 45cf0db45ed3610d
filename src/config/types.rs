use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Run configuration, resolved once before conversion starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Glob pattern selecting Markdown sources
    #[serde(default = "defaults::default_input")]
    pub input: String,

    /// Literal layout text, or a path to a layout file when it differs
    /// from the built-in default
    #[serde(default = "defaults::default_template")]
    pub template: String,

    /// Destination directory for generated files; must already exist
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Value bound to `author` in templates
    #[serde(default = "defaults::default_author")]
    pub author: String,
}

/// Where the layout text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The built-in layout
    Inline(String),
    /// A layout file read once per run
    File(PathBuf),
}

/// Values supplied on the command line; each one replaces the
/// corresponding config value when present
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<String>,
    pub template: Option<String>,
    pub output: Option<PathBuf>,
    pub author: Option<String>,
}

impl Config {
    /// Decide how the template value is interpreted
    pub fn template_source(&self) -> TemplateSource {
        if self.template == crate::config::DEFAULT_TEMPLATE {
            TemplateSource::Inline(self.template.clone())
        } else {
            TemplateSource::File(PathBuf::from(&self.template))
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn merge_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(author) = overrides.author {
            self.author = author;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: defaults::default_input(),
            template: defaults::default_template(),
            output: defaults::default_output(),
            author: defaults::default_author(),
        }
    }
}
