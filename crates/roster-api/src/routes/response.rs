//! Shared response envelope for API consistency
//!
//! Every handler returns a [`ServiceResponse`]; the HTTP status code is
//! always a mirror of the `statusCode` field inside the body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Uniform envelope wrapping every handler result
///
/// Invariants, enforced by the constructors:
/// - `success` is true exactly when `status_code` is in the 2xx range
/// - `response_object` is non-null only on success paths that produce data
///
/// Constructed once per request and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    pub status_code: u16,
}

impl<T> ServiceResponse<T> {
    /// Build a success envelope with an optional payload
    ///
    /// # Panics
    ///
    /// Debug builds assert that `status` is in the 2xx range.
    #[must_use]
    pub fn success(message: impl Into<String>, response_object: Option<T>, status: StatusCode) -> Self {
        debug_assert!(status.is_success());
        Self {
            success: true,
            message: message.into(),
            response_object,
            status_code: status.as_u16(),
        }
    }

    /// Build a failure envelope; the payload is always null
    ///
    /// # Panics
    ///
    /// Debug builds assert that `status` is outside the 2xx range.
    #[must_use]
    pub fn failure(message: impl Into<String>, status: StatusCode) -> Self {
        debug_assert!(!status.is_success());
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
