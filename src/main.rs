use std::process::ExitCode;

// Module declarations
mod builder;
mod config;
mod markdown;
mod liquid;
mod cli;
mod utils;
mod layout;

fn main() -> ExitCode {
    cli::run()
}
