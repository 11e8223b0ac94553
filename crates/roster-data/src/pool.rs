//! Database connection pool management

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;

/// Create the database connection pool
///
/// The pool is opened once at process startup and shared by every request;
/// row-level consistency is delegated entirely to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if:
/// - The connection string is invalid
/// - The database server is unreachable or refuses connections
/// - Authentication credentials are invalid
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .context("Failed to create database pool")
}
