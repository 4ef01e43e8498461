//! Logger setup for the command line tool.

use log::LevelFilter;

/// Environment variable that turns on debug logging, same as `--verbose`.
pub const DEBUG_ENV: &str = "WORDSEARCH_DEBUG";

/// Sets up `env_logger` for the command line tool.
///
/// Logs at `Info` unless `debug_enabled` is true or [`DEBUG_ENV`] is set. `RUST_LOG` overrides
/// both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled || std::env::var_os(DEBUG_ENV).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::warn!("Logger was already initialized");
    }

    log::debug!("Logger initialized at {level:?} level");
}
