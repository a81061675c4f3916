//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply for each request via
//! Axum's state extraction (`DatabaseConnection` is a connection pool; clones
//! share the pool).

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
