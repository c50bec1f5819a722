//! Logger initialisation for the command-line tool
//!
//! The library only emits through the `log` facade; binaries decide where it
//! goes.

use log::LevelFilter;
use std::env;

/// Initialise `env_logger` for the CLI.
///
/// # Behavior
/// - `Info` by default, `Debug` when `debug_enabled` is true.
/// - `RUST_LOG`, when set, overrides both.
/// - Calling it twice leaves the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
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

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
