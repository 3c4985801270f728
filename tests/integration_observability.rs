#![cfg(feature = "observability")]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{get_json, setup_test_app};
use uniconnect_observability::{init_metrics, is_observability_enabled, metrics_router};

#[tokio::test]
async fn test_metrics_endpoint_exposes_calendar_queries() {
    if !is_observability_enabled() {
        return;
    }

    let handle = init_metrics().expect("recorder installs once per test binary");
    let app = setup_test_app(2025, 3, 15).merge(metrics_router(handle));

    let (status, _) = get_json(&app, "/api/academic-calendar").await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let exposition = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(exposition.contains("calendar_queries_total"));
    assert!(exposition.contains("http_requests_total"));
}
