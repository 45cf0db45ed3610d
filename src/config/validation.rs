use log::info;

use crate::config::Config;
use crate::utils::error::{MdpError, MdpResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> MdpResult<()> {
    validate_input_pattern(config)?;

    info!("Output directory: {}", config.output.display());
    Ok(())
}

/// The input pattern must be a usable glob
fn validate_input_pattern(config: &Config) -> MdpResult<()> {
    if config.input.trim().is_empty() {
        return Err(MdpError::Config("Input pattern is empty".to_string()));
    }

    glob::Pattern::new(&config.input).map_err(|e| MdpError::Config(format!(
        "Invalid input pattern \"{}\": {}", config.input, e
    )))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_pattern() {
        assert!(validate_config(&Config::default()).is_ok());

        let empty = Config { input: " ".to_string(), ..Config::default() };
        assert!(matches!(validate_config(&empty), Err(MdpError::Config(_))));

        let invalid = Config { input: "posts/[*.md".to_string(), ..Config::default() };
        assert!(matches!(validate_config(&invalid), Err(MdpError::Config(_))));
    }
}
