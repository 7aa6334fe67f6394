//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It replaces any
//! process-wide singletons: the database handle and token service are
//! passed down explicitly from here.

use sea_orm::DatabaseConnection;

use super::service::auth::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection
/// pool (clones share the pool) and `TokenService` holds reference-counted
/// signing keys.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the JWT bearer tokens used by the auth guard.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
