use crate::constants::WIRE_DATE_FORMAT;
use crate::error::{AppError, AppResult};
use chrono::NaiveDate;

/// Parses a date-only wire field (`YYYY-MM-DD`)
///
/// Several fields (`funding-date`, `transaction-date`, `snapshot-date`, ...)
/// are sent as plain date text rather than timestamps and are kept as
/// `String` in the models; this turns them into a `NaiveDate` on demand.
///
/// # Errors
/// Returns [`AppError::InvalidInput`] when the text is not a valid date
pub fn parse_wire_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), WIRE_DATE_FORMAT)
        .map_err(|e| AppError::InvalidInput(format!("invalid date {text:?}: {e}")))
}
