//! Serialization hooks for the API's loosely typed numeric values.
//!
//! The brokerage API encodes most monetary and ratio fields as JSON strings
//! (`"1234.56"`), sometimes as the empty string (`""`) when no value applies,
//! and occasionally as bare numbers. [`LenientFloat`] accepts all three.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::ops::Deref;

/// The two-character JSON literal for an empty string
pub const EMPTY_STRING_TOKEN: &str = "\"\"";

/// Phrase carried by every [`MalformedNumber`] message
pub const MALFORMED_NUMBER_MARKER: &str = "is not a float literal";

/// Error raised when a lenient numeric token is not a float literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedNumber {
    token: String,
    /// `None` when the text parsed but overflowed or named a non-finite value
    source: Option<ParseFloatError>,
}

impl MalformedNumber {
    fn non_finite(token: impl Into<String>) -> Self {
        MalformedNumber {
            token: token.into(),
            source: None,
        }
    }

    /// The offending token, as it was handed to the parser
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for MalformedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "{:?} {} ({})",
                self.token, MALFORMED_NUMBER_MARKER, source
            ),
            None => write!(
                f,
                "{:?} {} (value is not finite)",
                self.token, MALFORMED_NUMBER_MARKER
            ),
        }
    }
}

impl std::error::Error for MalformedNumber {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Whether a rendered deserialization message originates from [`MalformedNumber`]
pub(crate) fn is_malformed_number_message(message: &str) -> bool {
    let infix = format!("\" {MALFORMED_NUMBER_MARKER} (");
    message.starts_with('"') && message.contains(&infix)
}

/// Converts one numeric token into an `f64`.
///
/// `token` may be the raw JSON token (`""`, `"12.5"`, `12.5`) or the string
/// contents the JSON parser already unquoted. The empty string always yields
/// `0.0` without attempting a parse. Any other token has every `"` removed and
/// must then be a base-10 float literal.
///
/// # Errors
/// Returns [`MalformedNumber`] when the unquoted text is not a float literal,
/// including whitespace-only text, or when it parses to an infinite or NaN
/// value (`"inf"`, `"NaN"`, `"1e400"`).
///
/// # Examples
/// ```
/// use tastytrade_model::presentation::serialization::parse_lenient_float;
///
/// assert_eq!(parse_lenient_float(r#""""#).unwrap(), 0.0);
/// assert_eq!(parse_lenient_float(r#""-0.5""#).unwrap(), -0.5);
/// assert_eq!(parse_lenient_float("1e3").unwrap(), 1000.0);
/// assert!(parse_lenient_float(r#""abc""#).is_err());
/// assert!(parse_lenient_float(r#""1e400""#).is_err());
/// ```
pub fn parse_lenient_float(token: &str) -> Result<f64, MalformedNumber> {
    if token.is_empty() || token == EMPTY_STRING_TOKEN {
        return Ok(0.0);
    }
    let value = token
        .replace('"', "")
        .parse::<f64>()
        .map_err(|source| MalformedNumber {
            token: token.to_string(),
            source: Some(source),
        })?;
    if !value.is_finite() {
        return Err(MalformedNumber::non_finite(token));
    }
    Ok(value)
}

/// Floating-point value decoded from a quoted, empty or bare JSON number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LenientFloat(pub f64);

impl LenientFloat {
    /// Zero, the value of an empty-string field
    pub const ZERO: LenientFloat = LenientFloat(0.0);

    /// Returns the wrapped value
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Deref for LenientFloat {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for LenientFloat {
    fn from(value: f64) -> Self {
        LenientFloat(value)
    }
}

impl From<LenientFloat> for f64 {
    fn from(value: LenientFloat) -> Self {
        value.0
    }
}

impl fmt::Display for LenientFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct LenientFloatVisitor;

impl Visitor<'_> for LenientFloatVisitor {
    type Value = LenientFloat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or an empty string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_lenient_float(v).map(LenientFloat).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom(MalformedNumber::non_finite(v.to_string())));
        }
        Ok(LenientFloat(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LenientFloat(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LenientFloat(v as f64))
    }
}

impl<'de> Deserialize<'de> for LenientFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientFloatVisitor)
    }
}

impl Serialize for LenientFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

/// `serde(with = ...)` module for plain `f64` fields using lenient decoding
pub mod lenient_float {
    use super::LenientFloat;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes the value as a bare JSON number
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    /// Reads a quoted, empty or bare number
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        LenientFloat::deserialize(deserializer).map(f64::from)
    }
}

/// `serde(with = ...)` module for `Option<f64>` fields; `null` maps to `None`
pub mod lenient_float_opt {
    use super::LenientFloat;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes `Some` as a bare number and `None` as `null`
    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(v),
            None => serializer.serialize_none(),
        }
    }

    /// Reads `null`, a quoted, empty or bare number
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<LenientFloat>::deserialize(deserializer).map(|value| value.map(f64::from))
    }
}
