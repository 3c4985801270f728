use utoipa::OpenApi;

use crate::modules::academic_calendar::model::{AcademicCalendar, AcademicYear};
use crate::modules::semesters::model::{
    Semester, SemesterContainsResponse, SemesterOrdinal, SemesterStatus, SemesterSummary,
};
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::academic_calendar::controller::get_academic_calendar,
        crate::modules::academic_calendar::controller::get_current_academic_year,
        crate::modules::academic_calendar::controller::get_academic_year,
        crate::modules::semesters::controller::list_semesters,
        crate::modules::semesters::controller::get_active_semester,
        crate::modules::semesters::controller::get_semester,
        crate::modules::semesters::controller::check_semester_contains,
    ),
    components(
        schemas(
            AcademicCalendar,
            AcademicYear,
            Semester,
            SemesterOrdinal,
            SemesterStatus,
            SemesterSummary,
            SemesterContainsResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Academic Calendar", description = "Academic years and the calendar around a reference date"),
        (name = "Semesters", description = "Semester lookups and progress helpers"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "UniConnect API",
        version = "0.1.0",
        description = "Read-only academic calendar API for the UniConnect university portal.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
