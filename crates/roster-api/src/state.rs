//! Application state for axum handlers
//!
//! Holds the shared service, initialized once at startup and passed to all
//! handlers; the repository behind it owns the process-wide database handle.

use std::sync::Arc;

use roster_data::UserRepository;

use crate::service::UserService;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// User CRUD service over the configured repository
    pub users: Arc<UserService>,
}

impl AppState {
    /// Create application state over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: Arc::new(UserService::new(repository)),
        }
    }
}
