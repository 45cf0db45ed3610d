use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdp")]
#[command(about = "Static page generator for markdown source files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown files to process (glob pattern, defaults to *.md)
    #[arg(short, long, value_name = "PATTERN")]
    pub input: Option<String>,

    /// Template file to use for generating HTML
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<String>,

    /// Location to write HTML files to (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Author name for templates: {{author}}
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Configuration file (YAML or TOML)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Print verbose output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Values given on the command line, for layering over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "mdp", "-i", "posts/*.md", "-o", "site", "--author", "Ada", "-g",
        ])
        .unwrap();

        assert_eq!(cli.input.as_deref(), Some("posts/*.md"));
        assert_eq!(cli.output, Some(PathBuf::from("site")));
        assert_eq!(cli.author.as_deref(), Some("Ada"));
        assert!(cli.template.is_none());
        assert!(cli.debug);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_only_carry_given_flags() {
        let cli = Cli::try_parse_from(["mdp", "-t", "layout.html"]).unwrap();
        let overrides = cli.overrides();

        assert_eq!(overrides.template.as_deref(), Some("layout.html"));
        assert!(overrides.input.is_none());
        assert!(overrides.output.is_none());
        assert!(overrides.author.is_none());
    }
}
