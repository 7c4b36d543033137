//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds the database connection pool and the token issuer used to
//! sign and verify bearer tokens.

use sea_orm::DatabaseConnection;

use crate::server::service::identity::token::TokenIssuer;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenIssuer` holds reference-counted key material
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies the bearer tokens issued by `GetToken`.
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenIssuer) -> Self {
        Self { db, tokens }
    }
}
