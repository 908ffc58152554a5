//! Logging setup for the command-line binary.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at startup. `RUST_LOG` takes precedence over the
//! verbosity flag.

use log::LevelFilter;

/// Map `-v` occurrences to a log level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .format_target(verbosity >= 2)
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
