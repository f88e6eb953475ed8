//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool whose clones share the
//! pool, `Tz` is `Copy`, and the secret is a small `String`.

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Fixed civil timezone defining the restaurant's notion of "today".
    pub timezone: Tz,

    /// Secret used to sign and verify admin bearer tokens.
    pub jwt_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `timezone` - Restaurant's civil timezone
    /// - `jwt_secret` - HMAC secret for admin tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, timezone: Tz, jwt_secret: String) -> Self {
        Self {
            db,
            timezone,
            jwt_secret,
        }
    }
}
