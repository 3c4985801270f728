//! Semesters module.
//!
//! Lookups and dashboard helpers (days remaining, days elapsed, duration,
//! date membership) over the semesters generated by the academic calendar.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
