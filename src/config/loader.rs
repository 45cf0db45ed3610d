use std::path::Path;
use std::fs;
use log::debug;

use crate::config::types::Config;
use crate::utils::error::{MdpError, MdpResult};

/// Load the run configuration, optionally from a YAML or TOML file.
///
/// Without a file every option takes its default. Validation happens after
/// command-line overrides are applied.
pub fn load_config(config_file: Option<&Path>) -> MdpResult<Config> {
    let config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(path)?
        }
        None => {
            debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse a configuration file based on its extension
fn parse_config_file(config_path: &Path) -> MdpResult<Config> {
    let content = fs::read_to_string(config_path)
        .map_err(|e| MdpError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(&content, config_path),
        "toml" => parse_toml_config(&content, config_path),
        _ => Err(MdpError::Config(format!(
            "Unsupported configuration file format: {}", config_path.display()
        ))),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> MdpResult<Config> {
    // An empty YAML document deserializes as null rather than an empty map
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| MdpError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> MdpResult<Config> {
    toml::from_str(content)
        .map_err(|e| MdpError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}
