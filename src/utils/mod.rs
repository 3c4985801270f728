//! Utility modules for the UniConnect API.
//!
//! - [`date_format`]: Locale-aware date rendering (`pt-MZ`)
//! - [`errors`]: Mapping of calendar errors onto HTTP errors

pub mod date_format;
pub mod errors;
