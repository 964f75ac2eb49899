/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";
/// Log level used when `LOGLEVEL` is not set
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
/// Environment variable enabling payload excerpts in decode error logs
pub const LOG_PAYLOAD_ON_ERROR_ENV: &str = "TT_LOG_PAYLOAD_ON_ERROR";
/// Environment variable limiting the size of logged payload excerpts
pub const MAX_LOGGED_PAYLOAD_BYTES_ENV: &str = "TT_MAX_LOGGED_PAYLOAD_BYTES";
/// Default size limit, in bytes, of a logged payload excerpt
pub const DEFAULT_MAX_LOGGED_PAYLOAD_BYTES: usize = 512;
/// Format of date-only wire fields
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Effect marking an amount paid out of the account
pub const EFFECT_DEBIT: &str = "Debit";
/// Effect marking an amount paid into the account
pub const EFFECT_CREDIT: &str = "Credit";
/// Effect of an amount with no sign
pub const EFFECT_NONE: &str = "None";
