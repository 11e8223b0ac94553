//! Request-level errors emitted before a handler runs
//!
//! These are the only errors that cross the axum boundary; the service layer
//! converts storage failures into envelopes itself and never returns `Err`
//! past a handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use crate::routes::response::ServiceResponse;

/// Rejections produced by the validation extractors
///
/// Both variants short-circuit the pipeline with a 400 envelope; the handler
/// they guard never runs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed schema validation (or was not parseable JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Path parameter was not a positive integer.
    #[error("Invalid {0} format. Must be a positive integer.")]
    InvalidPathParam(&'static str),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ServiceResponse::<()>::failure(self.to_string(), StatusCode::BAD_REQUEST).into_response()
    }
}

/// Render every violated constraint as `field: message`, alphabetically by
/// field, joined with `"; "`
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let detail = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                })
                .collect::<Vec<_>>()
                .join(", ");
            (field.to_string(), detail)
        })
        .collect();
    violations.sort();

    violations
        .into_iter()
        .map(|(field, detail)| format!("{field}: {detail}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Probe {
        #[validate(required(message = "Required"))]
        name: Option<String>,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn violations_are_field_qualified_and_sorted() {
        let probe = Probe {
            name: None,
            email: "not-an-address".to_string(),
        };
        let errors = probe.validate().unwrap_err();

        let message = ApiError::from(errors).to_string();
        assert_eq!(
            message,
            "Validation error: email: Invalid email format; name: Required"
        );
    }

    #[test]
    fn path_param_error_names_the_parameter() {
        let message = ApiError::InvalidPathParam("id").to_string();
        assert_eq!(message, "Invalid id format. Must be a positive integer.");
    }
}
