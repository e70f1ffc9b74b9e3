//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned for each request through Axum's
//! state extraction. It holds the database connection pool and the token service.

use sea_orm::DatabaseConnection;

use super::service::token::TokenService;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool whose clones
/// share connections, and `TokenService` keeps its keys behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service built from the configured JWT secret
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
