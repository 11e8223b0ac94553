//! User CRUD routes and handlers
//!
//! Handlers hold no business logic: each extracts its validated input, calls
//! exactly one [`UserService`] method, and relays the returned envelope. The
//! extractors in [`crate::extract`] have already rejected malformed bodies
//! and non-positive ids by the time a handler runs.
//!
//! | Method   | Path          | Success        | Failure             |
//! |----------|---------------|----------------|---------------------|
//! | `GET`    | `/users`      | 200, list      | 500                 |
//! | `POST`   | `/users`      | 201, entity    | 400 validation, 500 |
//! | `GET`    | `/users/{id}` | 200, entity    | 400, 404, 500       |
//! | `PUT`    | `/users/{id}` | 200, entity    | 400, 404, 500       |
//! | `DELETE` | `/users/{id}` | 200, no payload| 400, 404, 500       |

use axum::Router;
use axum::extract::State;
use axum::routing::get;

use roster_data::User;

use crate::dto::{CreateUserRequest, UpdateUserRequest};
use crate::extract::{UserId, ValidatedJson};
use crate::routes::response::ServiceResponse;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// `GET /users`
async fn list_users(State(state): State<AppState>) -> ServiceResponse<Vec<User>> {
    state.users.find_all().await
}

/// `GET /users/{id}`
async fn get_user(State(state): State<AppState>, UserId(id): UserId) -> ServiceResponse<User> {
    state.users.find_by_id(id).await
}

/// `POST /users`
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> ServiceResponse<User> {
    state.users.create(payload.into_new_user()).await
}

/// `PUT /users/{id}`
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> ServiceResponse<User> {
    state.users.update(id, payload.into()).await
}

/// `DELETE /users/{id}`
async fn delete_user(State(state): State<AppState>, UserId(id): UserId) -> ServiceResponse<User> {
    state.users.delete(id).await
}
