//! # tastytrade-model
//!
//! Typed data models for the tastytrade brokerage REST API.
//!
//! The API sends most monetary and ratio values as JSON strings, sometimes as
//! the empty string, and occasionally as bare numbers. Every such field is a
//! [`presentation::serialization::LenientFloat`], which decodes all three
//! forms: `""` becomes `0.0`, anything else must be a float literal once its
//! quotes are stripped, and malformed text fails the whole record.
//!
//! ## Usage
//!
//! ```rust
//! use tastytrade_model::prelude::*;
//!
//! let body = br#"{"data": {"account-number": "5WT00001", "cash-balance": "1250.5",
//!     "pending-cash": "", "pending-cash-effect": "None"}}"#;
//!
//! let decoder = ResponseDecoder::new(DecodeConfig::default());
//! let balance: AccountBalance = decoder.decode_data(body).unwrap();
//! assert_eq!(balance.cash_balance.value(), 1250.5);
//! assert_eq!(balance.pending_cash.value(), 0.0);
//! ```
//!
//! ## Modules
//!
//! * [`presentation`] - wire records and the lenient numeric decoder
//! * [`model`] - response envelopes and [`model::decoder::ResponseDecoder`]
//! * [`application`] - configuration loaded from the environment
//! * [`utils`] - logging, env helpers, signed amounts and date parsing
//! * [`error`] - [`error::AppError`]

/// Library configuration
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Response envelopes and the body decoder
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Wire records of the brokerage API
pub mod presentation;

/// Logging, environment, amount and date helpers
pub mod utils;

/// Library version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
