//! Academic calendar module.
//!
//! Derives the two-semester academic year structure (Feb 1 to Jul 31 and
//! Aug 1 to Dec 7) around a reference instant and exposes it read-only.
//! Nothing here is stored: every response is recomputed from the clock.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
