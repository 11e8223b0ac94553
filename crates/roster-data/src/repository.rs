//! `PostgreSQL`-backed repository for the `users` table
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id    SERIAL PRIMARY KEY,
//!     name  TEXT NOT NULL,
//!     email TEXT NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{DatabaseErrorExt, DatabaseResult};
use crate::models::{NewUser, User, UserChanges};
use crate::traits::UserRepository;

/// Repository executing parameterized single-statement SQL against Postgres
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new repository over an existing connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_db_err("find_all")
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_db_err("find_by_id")
    }

    async fn insert(&self, user: NewUser) -> DatabaseResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(user.name)
        .bind(user.email)
        .fetch_one(&self.pool)
        .await
        .map_db_err("insert")
    }

    async fn update(&self, id: i32, changes: UserChanges) -> DatabaseResult<Option<User>> {
        // COALESCE keeps the stored value for fields absent from the request.
        sqlx::query_as::<_, User>(
            "UPDATE users \
             SET name = COALESCE($2, name), email = COALESCE($3, email) \
             WHERE id = $1 \
             RETURNING id, name, email",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .fetch_optional(&self.pool)
        .await
        .map_db_err("update")
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_db_err("delete")?;

        Ok(result.rows_affected() > 0)
    }
}
