//! Repository trait for dependency injection and testing

use async_trait::async_trait;

use crate::error::DatabaseResult;
use crate::models::{NewUser, User, UserChanges};

/// Single-table access to the `users` store
///
/// Each method maps to one parameterized statement; there are no
/// multi-statement transactions.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user, ordered by id
    async fn find_all(&self) -> DatabaseResult<Vec<User>>;

    /// Fetch one user by id, `None` if the row does not exist
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>>;

    /// Insert a new user and return the row with its assigned id
    async fn insert(&self, user: NewUser) -> DatabaseResult<User>;

    /// Apply the given changes to a row, returning the updated row
    ///
    /// Returns `None` when no row with that id exists.
    async fn update(&self, id: i32, changes: UserChanges) -> DatabaseResult<Option<User>>;

    /// Delete a row by id, returning whether a row was removed
    async fn delete(&self, id: i32) -> DatabaseResult<bool>;
}
