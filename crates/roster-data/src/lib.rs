//! Storage layer for the Roster service
//!
//! Provides the `users` table access behind a [`UserRepository`] trait so the
//! HTTP layer can be exercised against an in-memory mock without a running
//! `PostgreSQL` instance.

pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;
pub mod traits;

pub use config::DatabaseConfig;
pub use error::{DatabaseError, DatabaseResult};
pub use mock::MockUserRepository;
pub use models::{NewUser, User, UserChanges};
pub use pool::create_pool;
pub use repository::PgUserRepository;
pub use traits::UserRepository;
