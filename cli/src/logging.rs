//! Terminal logger setup.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging on stderr. Reports are written to stdout separately
/// and never go through the logger.
pub fn init_logging(verbosity: u8) {
    let filter = level_for(verbosity);
    let config = ConfigBuilder::new().build();

    if let Err(e) = TermLogger::init(
        filter,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Can't initialize the terminal log output: {e}. Will degrade to a simpler logger");
        if let Err(e_simple) = SimpleLogger::init(filter, config) {
            eprintln!("Simple logging failed too: {e_simple}");
        }
    }
}
