//! HTTP layer for the Roster service
//!
//! Request flow: validation extractor -> handler -> [`service::UserService`]
//! -> [`roster_data::UserRepository`]. Every endpoint answers with the
//! [`routes::response::ServiceResponse`] envelope, mirroring its `statusCode`
//! field as the HTTP status.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod service;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
