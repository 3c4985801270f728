use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_semester_contains, get_active_semester, get_semester, list_semesters};

pub fn init_semesters_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_semesters))
        .route("/active", get(get_active_semester))
        .route("/{id}", get(get_semester))
        .route("/{id}/contains", get(check_semester_contains))
}
