//! Database configuration loaded from the environment
//!
//! Follows a simple hierarchy: safe defaults, overridden by environment
//! variables, validated at load time. The only required setting is
//! `DATABASE_URL`.

use anyhow::{Context, Result};

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the `users` store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full `PostgreSQL` connection string
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not set
    /// - `DATABASE_MAX_CONNECTIONS` is set but not a valid integer
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is not set")?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}
