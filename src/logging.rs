//! Logger setup for the command-line tool.

use log::LevelFilter;

/// Install `env_logger`, mapping `-v` counts to a default level.
///
/// `RUST_LOG` still takes precedence when it is set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
