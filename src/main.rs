//! University-restaurant menu publication and feedback backend.
//!
//! Admins publish daily menus (breakfast/lunch/dinner); the public views the
//! week's menus, comments on them, and casts like/dislike votes on protein
//! options. Vote aggregates and daily/weekly rankings are recomputed from raw
//! rows on every read.
//!
//! The backend follows a layered architecture:
//!
//! - **Controller layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service layer** (`service/`) - Business logic between controllers and data layer
//! - **Data layer** (`data/`) - Database operations over SeaORM entities
//! - **Model layer** (`model/`) - Domain models, operation params and DTOs
//! - **Error layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token guard for admin routes

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!(addr = %config.bind_addr, timezone = %config.timezone, "Starting server");

    let app = router::router()
        .with_state(AppState::new(db, config.timezone, config.jwt_secret.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("failed to bind {}: {e}", config.bind_addr)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("server error: {e}")))?;

    Ok(())
}
