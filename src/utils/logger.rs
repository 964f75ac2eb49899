use crate::constants::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Maps a level name to a `tracing` level, `INFO` for unknown names
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber at the level named by `LOGLEVEL`.
///
/// Safe to call repeatedly; only the first call has an effect. If another
/// subscriber is already installed it is left in place.
pub fn setup_logger() {
    setup_logger_with_level(&get_env_or_default(
        LOG_LEVEL_ENV,
        DEFAULT_LOG_LEVEL.to_string(),
    ));
}

/// Installs the global tracing subscriber at an explicit level
pub fn setup_logger_with_level(level_name: &str) {
    let level = parse_level(level_name);
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {level}");
        }
    });
}
