use crate::presentation::serialization::MalformedNumber;
use std::fmt;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// I/O failure while reading a payload
    Io(std::io::Error),
    /// JSON syntax or shape error reported by `serde_json`
    Json(serde_json::Error),
    /// A lenient numeric field held text that is not a float literal
    MalformedNumber(String),
    /// The API answered with its error envelope
    Api {
        /// Vendor error code, when present
        code: Option<String>,
        /// Human readable message from the vendor
        message: String,
    },
    /// Generic deserialization failure
    Deserialization(String),
    /// Invalid input supplied by the caller
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::MalformedNumber(msg) => write!(f, "malformed numeric literal: {msg}"),
            AppError::Api {
                code: Some(code),
                message,
            } => write!(f, "api error [{code}]: {message}"),
            AppError::Api {
                code: None,
                message,
            } => write!(f, "api error: {message}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<MalformedNumber> for AppError {
    fn from(e: MalformedNumber) -> Self {
        AppError::MalformedNumber(e.to_string())
    }
}
