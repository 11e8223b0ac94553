pub mod health;
pub mod response;
pub mod users;

pub use response::ServiceResponse;

use axum::Router;

use crate::state::AppState;

/// Assemble the full route table over the shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .with_state(state)
}
