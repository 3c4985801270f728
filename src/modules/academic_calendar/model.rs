//! Academic calendar data models and request parameters.
//!
//! Re-exports the calendar models from the `uniconnect-models` crate and adds
//! the query types used by the controllers.

use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use uniconnect_core::deserialize_optional_reference_time;

pub use uniconnect_models::academic_years::*;
pub use uniconnect_models::errors::CalendarError;

/// Optional override of "now" for previews.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReferenceTimeParams {
    /// Reference date or date-time (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`); defaults to now
    #[serde(default, deserialize_with = "deserialize_optional_reference_time")]
    #[param(value_type = Option<String>, example = "2025-03-15")]
    pub at: Option<NaiveDateTime>,
}
