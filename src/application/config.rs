use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_LOGGED_PAYLOAD_BYTES, LOG_LEVEL_ENV, LOG_PAYLOAD_ON_ERROR_ENV,
    MAX_LOGGED_PAYLOAD_BYTES_ENV,
};
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Settings for turning response bodies into models
pub struct DecodeConfig {
    /// Whether a failed decode logs an excerpt of the offending payload
    pub log_payload_on_error: bool,
    /// Maximum number of payload bytes included in that excerpt
    pub max_logged_payload_bytes: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            log_payload_on_error: false,
            max_logged_payload_bytes: DEFAULT_MAX_LOGGED_PAYLOAD_BYTES,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration of the library
pub struct Config {
    /// Response decoding settings
    pub decode: DecodeConfig,
    /// Level name passed to the logger
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// Variables:
    /// * `TT_LOG_PAYLOAD_ON_ERROR` - log payload excerpts on decode errors (default `false`)
    /// * `TT_MAX_LOGGED_PAYLOAD_BYTES` - excerpt size limit (default 512)
    /// * `LOGLEVEL` - log level name (default `INFO`)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            decode: DecodeConfig {
                log_payload_on_error: get_env_flag(LOG_PAYLOAD_ON_ERROR_ENV, false),
                max_logged_payload_bytes: get_env_or_default(
                    MAX_LOGGED_PAYLOAD_BYTES_ENV,
                    DEFAULT_MAX_LOGGED_PAYLOAD_BYTES,
                ),
            },
            log_level: get_env_or_default(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
