//! # UniConnect Models
//!
//! Domain models for the UniConnect academic calendar.
//!
//! An academic year runs from February to December of a single calendar year
//! and always holds two semesters (Feb 1 to Jul 31, Aug 1 to Dec 7). The
//! window from Dec 8 to Jan 31 is the recess and belongs to no semester.
//!
//! # Modules
//!
//! - [`ids`]: Semester ordinals and the `YYYY-S{n}` identifier
//! - [`semesters`]: Semester snapshots, status and dashboard summaries
//! - [`academic_years`]: Academic years and the three-year calendar view
//! - [`errors`]: Calendar error type
//!
//! # Example
//!
//! ```ignore
//! use uniconnect_models::ids::{SemesterId, SemesterOrdinal};
//!
//! let id: SemesterId = "2025-S1".parse()?;
//! assert_eq!(id.ordinal, SemesterOrdinal::First);
//! assert_eq!(id.start_date()?.to_string(), "2025-02-01");
//! ```

pub mod academic_years;
pub mod errors;
pub mod ids;
pub mod semesters;

pub use academic_years::{AcademicCalendar, AcademicYear};
pub use errors::CalendarError;
pub use ids::{SemesterId, SemesterOrdinal};
pub use semesters::{Semester, SemesterStatus, SemesterSummary};
