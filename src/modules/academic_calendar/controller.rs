use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use uniconnect_core::AppError;
use uniconnect_observability::track_calendar_query;

use crate::modules::academic_calendar::model::{
    AcademicCalendar, AcademicYear, ReferenceTimeParams,
};
use crate::modules::academic_calendar::service::AcademicCalendarService;
use crate::state::AppState;
use crate::utils::errors::calendar_error;
use crate::validator::ValidatedQuery;

/// Get the previous, current and next academic years
#[utoipa::path(
    get,
    path = "/api/academic-calendar",
    params(ReferenceTimeParams),
    responses(
        (status = 200, description = "Academic calendar around the reference time", body = AcademicCalendar),
        (status = 400, description = "Invalid reference time")
    ),
    tag = "Academic Calendar"
)]
#[instrument(skip(state))]
pub async fn get_academic_calendar(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ReferenceTimeParams>,
) -> Result<Json<AcademicCalendar>, AppError> {
    track_calendar_query("calendar");
    let now = state.reference_time(params.at);

    let calendar = AcademicCalendarService::get_academic_calendar(now).map_err(calendar_error)?;

    Ok(Json(calendar))
}

/// Get the academic year the reference time belongs to
#[utoipa::path(
    get,
    path = "/api/academic-calendar/current-year",
    params(ReferenceTimeParams),
    responses(
        (status = 200, description = "Current academic year", body = AcademicYear),
        (status = 400, description = "Invalid reference time")
    ),
    tag = "Academic Calendar"
)]
#[instrument(skip(state))]
pub async fn get_current_academic_year(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ReferenceTimeParams>,
) -> Result<Json<AcademicYear>, AppError> {
    track_calendar_query("current_year");
    let now = state.reference_time(params.at);

    let year = AcademicCalendarService::get_current_academic_year(now).map_err(calendar_error)?;

    Ok(Json(year))
}

/// Preview the academic year starting in a given calendar year
#[utoipa::path(
    get,
    path = "/api/academic-calendar/years/{start_year}",
    params(
        ("start_year" = i32, Path, description = "Calendar year the academic year starts in"),
        ReferenceTimeParams
    ),
    responses(
        (status = 200, description = "Academic year", body = AcademicYear),
        (status = 400, description = "Year outside the supported range or invalid reference time")
    ),
    tag = "Academic Calendar"
)]
#[instrument(skip(state))]
pub async fn get_academic_year(
    State(state): State<AppState>,
    Path(start_year): Path<i32>,
    ValidatedQuery(params): ValidatedQuery<ReferenceTimeParams>,
) -> Result<Json<AcademicYear>, AppError> {
    track_calendar_query("year");
    let now = state.reference_time(params.at);

    let year = AcademicCalendarService::generate_academic_year(start_year, now)
        .map_err(calendar_error)?;

    Ok(Json(year))
}
