//! Health check endpoint

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tracing::{info, instrument};

use crate::routes::response::ServiceResponse;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health-check", get(health_check))
}

/// Liveness probe; answers with the standard envelope and no payload
#[instrument]
async fn health_check() -> ServiceResponse<()> {
    info!("Health check request");
    ServiceResponse::success("Service is healthy", None, StatusCode::OK)
}
