//! Application state shared across all request handlers.
//!
//! The state is built once by the composition root in `main` and cloned for
//! each request handler through Axum's state extraction. There are no
//! ambient statics: everything a handler needs travels through this struct.

use sea_orm::DatabaseConnection;

use crate::service::token::TokenIssuer;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and `TokenIssuer` holds only keys and settings
/// that are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenIssuer) -> Self {
        Self { db, tokens }
    }
}
