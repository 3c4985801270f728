use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use uniconnect::router::init_router;
use uniconnect::state::AppState;
use uniconnect_core::FixedClock;

/// Router whose clock is frozen at midnight on the given date.
pub fn setup_test_app(year: i32, month: u32, day: u32) -> axum::Router {
    let clock = FixedClock::on_date(year, month, day).expect("valid test date");
    init_router(AppState::with_clock(Arc::new(clock)))
}

#[allow(dead_code)]
pub fn setup_test_app_with_state(state: AppState) -> axum::Router {
    init_router(state)
}

/// Issue a GET request and decode the JSON body.
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}
