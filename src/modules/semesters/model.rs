//! Semester data models and request parameters.
//!
//! Re-exports the semester models from the `uniconnect-models` crate and adds
//! the query and response types used by the controllers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use uniconnect_core::deserialize_optional_reference_time;

pub use uniconnect_models::ids::{SemesterId, SemesterOrdinal};
pub use uniconnect_models::semesters::*;

/// Bounds on listable years, comfortably inside chrono's date range.
pub const MIN_LISTABLE_YEAR: i32 = -262_000;
pub const MAX_LISTABLE_YEAR: i32 = 262_000;

/// Query parameters for listing semesters across academic years.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SemesterRangeParams {
    /// First academic year (inclusive)
    #[validate(range(min = MIN_LISTABLE_YEAR, max = MAX_LISTABLE_YEAR))]
    pub from: i32,
    /// Last academic year (inclusive)
    #[validate(range(min = MIN_LISTABLE_YEAR, max = MAX_LISTABLE_YEAR))]
    pub to: i32,
    /// Reference date or date-time; defaults to now
    #[serde(default, deserialize_with = "deserialize_optional_reference_time")]
    #[param(value_type = Option<String>, example = "2025-03-15")]
    pub at: Option<NaiveDateTime>,
}

/// Query parameters for a date membership check.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SemesterContainsParams {
    /// Calendar date to test
    #[param(value_type = String, example = "2025-07-31")]
    pub date: NaiveDate,
}

/// Result of a date membership check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SemesterContainsResponse {
    #[schema(value_type = String, example = "2025-S1")]
    pub semester_id: SemesterId,
    pub date: NaiveDate,
    /// Whether `date` lies within the semester's inclusive date range
    pub contains: bool,
}
