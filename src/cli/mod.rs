pub mod types;
pub mod logging;

use std::io;
use std::process::ExitCode;
use clap::Parser;
use log::{error, info};

use crate::builder;
use crate::config;
use crate::utils::error::MdpResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(logging::level_for(cli.quiet, cli.verbose, cli.debug));

    match convert(&cli) {
        Ok(count) => {
            info!("Converted {} files", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the configuration and run the conversion, streaming output
/// paths to stdout
fn convert(cli: &types::Cli) -> MdpResult<usize> {
    let config = config::load_config(cli.config.as_deref())?
        .merge_overrides(cli.overrides());
    config::validate_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = builder::build_site(&config, &mut out)?;
    Ok(written.len())
}
