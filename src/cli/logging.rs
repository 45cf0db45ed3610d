use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command-line switches. Quiet wins over
/// debug, debug over verbose.
pub fn level_for(quiet: bool, verbose: bool, debug: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug {
        LevelFilter::Debug
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging with the specified level. Log lines go to stderr;
/// stdout carries only the generated file paths.
pub fn init_logging(level: LevelFilter) {
    let _ = SimpleLogger::new()
        .with_level(level)
        .init();
}
