//! # UniConnect API
//!
//! Academic calendar service for the UniConnect university portal, built with
//! Rust and Axum.
//!
//! ## Overview
//!
//! The portal's student, lecturer and coordinator dashboards all need to know
//! "where we are" in the academic year. This crate derives that view from a
//! reference instant:
//!
//! - An academic year starting in calendar year `Y` is labelled `Y/Y+1` and
//!   holds exactly two semesters: Feb 1 to Jul 31 and Aug 1 to Dec 7.
//! - Each semester is `upcoming`, `active` or `completed`, with a linear
//!   progress percentage while active.
//! - January belongs to the academic year that started the previous February.
//! - Dec 8 to Jan 31 is the recess: no semester is active.
//!
//! Nothing is persisted. Every call recomputes the calendar from a single
//! clock reading, so results are consistent within a request and
//! deterministic under a fixed clock.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Plain-text rendering for uniconnect-cli
//! ├── modules/          # Feature modules
//! │   ├── academic_calendar/  # Year generation and the 3-year calendar
//! │   └── semesters/          # Semester lookups and day-count helpers
//! └── utils/            # Date formatting, error mapping
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic (pure functions of the reference time)
//! - `model.rs`: Data models and request parameters
//! - `router.rs`: Axum router configuration
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! CALENDAR_TIMEZONE=Africa/Maputo
//! CALENDAR_MAX_YEAR_SPAN=50
//! ALLOWED_ORIGINS=http://localhost:5173
//! OBSERVABILITY_ENABLED=true
//! ```
//!
//! ### Previewing a Date
//!
//! Every endpoint accepts `?at=YYYY-MM-DD` to evaluate the calendar at another
//! instant:
//!
//! ```bash
//! curl 'http://localhost:3000/api/academic-calendar?at=2025-03-15'
//! cargo run --bin uniconnect-cli -- calendar --at 2025-03-15
//! ```
//!
//! ### API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod cli;
pub mod docs;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use uniconnect_config;
pub use uniconnect_core;
pub use uniconnect_models;
