//! User service: wraps repository outcomes in response envelopes
//!
//! Each operation is a single read or write against storage. Storage failures
//! are captured here, logged, and converted into a 500 envelope; nothing
//! propagates past this layer as `Err`.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::error;

use roster_data::{NewUser, User, UserChanges, UserRepository};

use crate::routes::response::ServiceResponse;

/// CRUD operations over the injected [`UserRepository`]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch every user; an empty table is a success, not an error
    pub async fn find_all(&self) -> ServiceResponse<Vec<User>> {
        match self.repository.find_all().await {
            Ok(users) => ServiceResponse::success(
                "Users retrieved successfully",
                Some(users),
                StatusCode::OK,
            ),
            Err(err) => {
                error!(error = %err, "failed to retrieve users");
                ServiceResponse::failure(
                    "An error occurred while retrieving users.",
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }

    /// Fetch one user by id
    pub async fn find_by_id(&self, id: i32) -> ServiceResponse<User> {
        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => ServiceResponse::success(
                "User retrieved successfully",
                Some(user),
                StatusCode::OK,
            ),
            Ok(None) => ServiceResponse::failure("User not found", StatusCode::NOT_FOUND),
            Err(err) => {
                error!(error = %err, user_id = id, "failed to find user");
                ServiceResponse::failure(
                    "An error occurred while finding user.",
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }

    /// Insert a new user, returning the entity with its assigned id
    pub async fn create(&self, user: NewUser) -> ServiceResponse<User> {
        match self.repository.insert(user).await {
            Ok(created) => ServiceResponse::success(
                "User created successfully",
                Some(created),
                StatusCode::CREATED,
            ),
            Err(err) => {
                error!(error = %err, "failed to create user");
                ServiceResponse::failure(
                    "An error occurred while creating user.",
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }

    /// Apply changes to an existing user
    pub async fn update(&self, id: i32, changes: UserChanges) -> ServiceResponse<User> {
        match self.repository.update(id, changes).await {
            Ok(Some(updated)) => ServiceResponse::success(
                "User updated successfully",
                Some(updated),
                StatusCode::OK,
            ),
            Ok(None) => ServiceResponse::failure("User not found", StatusCode::NOT_FOUND),
            Err(err) => {
                error!(error = %err, user_id = id, "failed to update user");
                ServiceResponse::failure(
                    "An error occurred while updating user.",
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }

    /// Remove a user; succeeds with no payload
    pub async fn delete(&self, id: i32) -> ServiceResponse<User> {
        match self.repository.delete(id).await {
            Ok(true) => {
                ServiceResponse::success("User deleted successfully", None, StatusCode::OK)
            }
            Ok(false) => ServiceResponse::failure("User not found", StatusCode::NOT_FOUND),
            Err(err) => {
                error!(error = %err, user_id = id, "failed to delete user");
                ServiceResponse::failure(
                    "An error occurred while deleting user.",
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
