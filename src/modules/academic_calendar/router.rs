use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_academic_calendar, get_academic_year, get_current_academic_year};

pub fn init_academic_calendar_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_academic_calendar))
        .route("/current-year", get(get_current_academic_year))
        .route("/years/{start_year}", get(get_academic_year))
}
