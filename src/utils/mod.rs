/// Module containing environment configuration helpers
pub mod config;
/// Module containing date parsing helpers for date-only wire fields
pub mod date;
/// Module containing signed amount helpers
pub mod finance;
/// Module containing logging utilities
pub mod logger;

pub use date::*;
pub use finance::*;
pub use logger::*;
