//! # UniConnect Core
//!
//! Core types shared by the UniConnect API and its tools.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`clock`]: Source of "now" for calendar computations
//! - [`serde`]: Deserialization helpers for reference-time parameters
//!
//! # Example
//!
//! ```ignore
//! use uniconnect_core::{AppError, Clock, FixedClock};
//!
//! let clock = FixedClock::on_date(2025, 3, 15).unwrap();
//! let now = clock.now();
//!
//! let error = AppError::not_found(anyhow::anyhow!("Semester not found"));
//! ```

pub mod clock;
pub mod errors;
pub mod serde;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::AppError;
pub use serde::{deserialize_optional_reference_time, parse_reference_time};
