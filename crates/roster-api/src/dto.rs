//! Request DTOs with declarative validation constraints
//!
//! The schema lives in the `validator` attributes; the extractor in
//! [`crate::extract`] runs it before any handler sees the payload. Fields are
//! `Option` so a missing key surfaces as a field-level "Required" violation
//! instead of a body-level deserialization rejection.

use serde::Deserialize;
use validator::Validate;

use roster_data::{NewUser, UserChanges};

/// Body of `POST /users`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must be a non-empty string")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Convert into the storage insert shape
    ///
    /// Both fields are guaranteed present by the `required` constraints,
    /// which run before any handler receives the payload.
    #[must_use]
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Body of `PUT /users/{id}`
///
/// Both fields are optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Must be a non-empty string"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn create_request_accepts_well_formed_input() {
        let request = CreateUserRequest {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_missing_name() {
        let request = CreateUserRequest {
            name: None,
            email: Some("ada@example.com".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn create_request_rejects_invalid_email() {
        let request = CreateUserRequest {
            name: Some("Ada".to_string()),
            email: Some("invalid-email".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn update_request_allows_absent_fields() {
        let request = UpdateUserRequest {
            name: None,
            email: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn update_request_still_checks_present_fields() {
        let request = UpdateUserRequest {
            name: Some(String::new()),
            email: Some("not-an-address".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
