use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use uniconnect_core::AppError;
use uniconnect_observability::track_calendar_query;

use crate::modules::academic_calendar::model::ReferenceTimeParams;
use crate::modules::academic_calendar::service::AcademicCalendarService;
use crate::modules::semesters::model::{
    Semester, SemesterContainsParams, SemesterContainsResponse, SemesterId, SemesterRangeParams,
    SemesterSummary,
};
use crate::modules::semesters::service::SemesterService;
use crate::state::AppState;
use crate::utils::errors::calendar_error;
use crate::validator::ValidatedQuery;

fn parse_semester_id(raw: &str) -> Result<SemesterId, AppError> {
    raw.parse::<SemesterId>().map_err(calendar_error)
}

/// List the semesters of a range of academic years, most recent first
#[utoipa::path(
    get,
    path = "/api/semesters",
    params(SemesterRangeParams),
    responses(
        (status = 200, description = "Semesters sorted by start date, newest first", body = Vec<Semester>),
        (status = 400, description = "Missing, inverted or too wide year range"),
        (status = 422, description = "Year outside the listable range")
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn list_semesters(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SemesterRangeParams>,
) -> Result<Json<Vec<Semester>>, AppError> {
    track_calendar_query("semester_list");
    SemesterService::validate_year_range(
        params.from,
        params.to,
        state.calendar_config.max_year_span,
    )
    .map_err(calendar_error)?;

    let now = state.reference_time(params.at);
    let semesters = AcademicCalendarService::get_semesters_for_years(params.from, params.to, now)
        .map_err(calendar_error)?;

    Ok(Json(semesters))
}

/// Get the semester currently in session
#[utoipa::path(
    get,
    path = "/api/semesters/active",
    params(ReferenceTimeParams),
    responses(
        (status = 200, description = "Active semester, or null during the recess", body = Option<SemesterSummary>),
        (status = 400, description = "Invalid reference time")
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn get_active_semester(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ReferenceTimeParams>,
) -> Result<Json<Option<SemesterSummary>>, AppError> {
    track_calendar_query("active_semester");
    let now = state.reference_time(params.at);

    let summary = AcademicCalendarService::get_active_semester(now)
        .map_err(calendar_error)?
        .map(|semester| SemesterService::summarize(semester, now, state.date_formatter.as_ref()))
        .transpose()
        .map_err(calendar_error)?;

    Ok(Json(summary))
}

/// Get a semester of the previous, current or next academic year by ID
#[utoipa::path(
    get,
    path = "/api/semesters/{id}",
    params(
        ("id" = String, Path, description = "Semester ID, e.g. 2025-S1"),
        ReferenceTimeParams
    ),
    responses(
        (status = 200, description = "Semester details", body = SemesterSummary),
        (status = 400, description = "Malformed semester ID"),
        (status = 404, description = "Semester not in the three-year window")
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn get_semester(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedQuery(params): ValidatedQuery<ReferenceTimeParams>,
) -> Result<Json<SemesterSummary>, AppError> {
    track_calendar_query("semester");
    let semester_id = parse_semester_id(&id)?;
    let now = state.reference_time(params.at);

    let semester = AcademicCalendarService::find_semester(semester_id, now)
        .map_err(calendar_error)?
        .ok_or_else(|| AppError::not_found(anyhow!("Semester {} not found", semester_id)))?;

    let summary = SemesterService::summarize(semester, now, state.date_formatter.as_ref())
        .map_err(calendar_error)?;

    Ok(Json(summary))
}

/// Check whether a date falls within a semester
#[utoipa::path(
    get,
    path = "/api/semesters/{id}/contains",
    params(
        ("id" = String, Path, description = "Semester ID, e.g. 2025-S1"),
        SemesterContainsParams
    ),
    responses(
        (status = 200, description = "Membership result", body = SemesterContainsResponse),
        (status = 400, description = "Malformed semester ID or date")
    ),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn check_semester_contains(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedQuery(params): ValidatedQuery<SemesterContainsParams>,
) -> Result<Json<SemesterContainsResponse>, AppError> {
    track_calendar_query("semester_contains");
    let semester_id = parse_semester_id(&id)?;

    let semester = AcademicCalendarService::evaluate_semester(semester_id, state.clock.now())
        .map_err(calendar_error)?;

    Ok(Json(SemesterContainsResponse {
        semester_id,
        date: params.date,
        contains: SemesterService::is_date_in_semester(params.date, &semester),
    }))
}
