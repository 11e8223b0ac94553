//! Route-level test for the health-check endpoint

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roster_api::AppState;
use roster_api::routes::create_router;
use roster_data::{MockUserRepository, UserRepository};

#[tokio::test]
async fn health_check_answers_with_success_envelope() {
    let repository: Arc<dyn UserRepository> = Arc::new(MockUserRepository::new());
    let app = create_router(AppState::new(repository));

    let request = Request::builder()
        .method("GET")
        .uri("/health-check")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let envelope: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["message"], "Service is healthy");
    assert_eq!(envelope["responseObject"], Value::Null);
    assert_eq!(envelope["statusCode"], 200);
}
