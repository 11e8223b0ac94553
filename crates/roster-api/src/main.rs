//! Roster API server
//!
//! HTTP CRUD service for the `User` resource, backed by `PostgreSQL`.

use std::sync::Arc;

use tracing::info;

use roster_api::AppState;
use roster_api::config::ApiConfig;
use roster_api::routes;
use roster_data::{DatabaseConfig, PgUserRepository, UserRepository, create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, then initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Roster API server...");

    let db_config = DatabaseConfig::from_env()?;
    let pool = create_pool(&db_config).await?;
    info!("Database pool ready");

    let repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let state = AppState::new(repository);
    let app = routes::create_router(state);

    let config = ApiConfig::from_env();
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
