//! Mock implementation of [`UserRepository`] for testing

// Allow test-specific patterns in mock implementation
#![allow(clippy::unwrap_used)] // Mocks can panic on lock poisoning
#![allow(clippy::expect_used)] // Test code can use expect

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DatabaseError, DatabaseResult};
use crate::models::{NewUser, User, UserChanges};
use crate::traits::UserRepository;

/// In-memory repository for exercising the HTTP layer without Postgres
///
/// Ids are assigned sequentially starting at 1, mirroring a `SERIAL` column.
/// `fail_next` arms a one-shot failure so tests can drive the 500 path.
#[derive(Debug, Default)]
pub struct MockUserRepository {
    users: Mutex<BTreeMap<i32, User>>,
    next_id: Mutex<i32>,
    fail_next: Mutex<Option<String>>,
}

impl MockUserRepository {
    /// Create an empty mock repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository seeded with the given users
    ///
    /// The id counter continues after the highest seeded id.
    #[must_use]
    pub fn with_users(seed: impl IntoIterator<Item = User>) -> Self {
        let repository = Self::new();
        {
            let mut users = repository.users.lock().unwrap();
            let mut next_id = repository.next_id.lock().unwrap();
            for user in seed {
                *next_id = (*next_id).max(user.id);
                users.insert(user.id, user);
            }
        }
        repository
    }

    /// Arm a one-shot failure for the next repository call
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    fn check_fail(&self, operation: &'static str) -> DatabaseResult<()> {
        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(DatabaseError::UnexpectedState { operation, message });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<User>> {
        self.check_fail("find_all")?;
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        self.check_fail("find_by_id")?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> DatabaseResult<User> {
        self.check_fail("insert")?;
        let mut users = self.users.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = User {
            id: *next_id,
            name: user.name,
            email: user.email,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> DatabaseResult<Option<User>> {
        self.check_fail("update")?;
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            if let Some(name) = changes.name {
                user.name = name;
            }
            if let Some(email) = changes.email {
                user.email = email;
            }
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        self.check_fail("delete")?;
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_positive_ids() {
        let repository = MockUserRepository::new();

        let first = repository
            .insert(new_user("Ada", "ada@example.com"))
            .await
            .unwrap();
        let second = repository
            .insert(new_user("Grace", "grace@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn with_users_continues_id_sequence_after_seed() {
        let repository = MockUserRepository::with_users([User {
            id: 41,
            name: "Seed".to_string(),
            email: "seed@example.com".to_string(),
        }]);

        let created = repository
            .insert(new_user("Next", "next@example.com"))
            .await
            .unwrap();

        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let repository = MockUserRepository::new();
        let created = repository
            .insert(new_user("Ada", "ada@example.com"))
            .await
            .unwrap();

        let updated = repository
            .update(
                created.id,
                UserChanges {
                    name: Some("Ada Lovelace".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let repository = MockUserRepository::new();
        let created = repository
            .insert(new_user("Ada", "ada@example.com"))
            .await
            .unwrap();

        assert!(repository.delete(created.id).await.unwrap());
        assert!(!repository.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn fail_next_fails_exactly_one_operation() {
        let repository = MockUserRepository::new();
        repository.fail_next("connection reset");

        assert!(repository.find_all().await.is_err());
        assert!(repository.find_all().await.is_ok());
    }
}
