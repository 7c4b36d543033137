use axum::{extract::FromRequestParts, http::Request};
use chrono::Duration;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{
    model::operation::Role,
    server::{
        middleware::auth::{AuthUser, Caller},
        service::identity::token::TokenIssuer,
        state::AppState,
    },
};

mod caller;

fn user() -> AuthUser {
    AuthUser {
        id: 7,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        roles: vec![Role::User],
    }
}

/// State whose database fails every query, for paths that must not touch it.
fn state() -> AppState {
    AppState::new(
        MockDatabase::new(DatabaseBackend::Sqlite).into_connection(),
        TokenIssuer::new("test-signing-key", "gamehub", "gamehub", Duration::minutes(5)),
    )
}
