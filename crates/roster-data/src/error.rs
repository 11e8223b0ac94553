//! Error types for database operations

use thiserror::Error;

/// Result alias for all repository operations
pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;

/// Errors surfaced by the storage layer
///
/// Every variant carries the logical operation that failed so callers can log
/// something more useful than a bare driver error.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A query against the `users` table failed.
    #[error("database error during {operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Failure injected or detected outside a driver call (mock, invariants).
    #[error("unexpected database state during {operation}: {message}")]
    UnexpectedState {
        operation: &'static str,
        message: String,
    },
}

/// Extension trait for attaching operation context to raw sqlx results
pub(crate) trait DatabaseErrorExt<T> {
    fn map_db_err(self, operation: &'static str) -> DatabaseResult<T>;
}

impl<T> DatabaseErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_db_err(self, operation: &'static str) -> DatabaseResult<T> {
        self.map_err(|source| DatabaseError::Query { operation, source })
    }
}
