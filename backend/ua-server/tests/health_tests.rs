mod common;

use crate::common::{create_test_app, send};

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_version() {
    let app = create_test_app().await;

    let (status, json) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_and_readiness_are_public() {
    let app = create_test_app().await;

    let (live, _) = send(&app, "GET", "/live", None, None).await;
    let (ready, _) = send(&app, "GET", "/ready", None, None).await;

    assert_eq!(live, StatusCode::OK);
    assert_eq!(ready, StatusCode::OK);
}
