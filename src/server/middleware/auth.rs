//! Caller resolution and per-operation authorization.
//!
//! A `Caller` is resolved for every request from either an `Authorization: Bearer` token
//! or the cookie session. Neither path queries the database: tokens carry the user's
//! roles in their claims, and sessions store the `AuthUser` captured at sign-in.
//!
//! Services call `Operation::authorize` as their first statement, so a caller lacking
//! access is rejected before any persistence work happens.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::operation::{AccessDecision, Operation, Role},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        state::AppState,
    },
};

/// Identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

/// The caller of the current request, anonymous when `user` is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Caller {
    pub user: Option<AuthUser>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn user(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.id)
    }

    pub fn roles(&self) -> Option<&[Role]> {
        self.user.as_ref().map(|user| user.roles.as_slice())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_in_role(&self, role: Role) -> bool {
        self.roles().is_some_and(|roles| roles.contains(&role))
    }
}

impl Operation {
    /// Checks the caller against this operation's access rule.
    ///
    /// # Returns
    /// - `Ok(())` - Caller may invoke the operation
    /// - `Err(AuthError::NotAuthenticated)` - Operation requires a signed-in caller
    /// - `Err(AuthError::AccessDenied)` - Caller holds none of the required roles
    pub fn authorize(&self, caller: &Caller) -> Result<(), AuthError> {
        match self.access.check(caller.roles()) {
            AccessDecision::Granted => Ok(()),
            AccessDecision::NotAuthenticated => {
                tracing::debug!("Anonymous call to {} rejected", self.path());
                Err(AuthError::NotAuthenticated)
            }
            AccessDecision::Forbidden => {
                tracing::debug!(
                    "Call to {} by user {:?} rejected for missing role",
                    self.path(),
                    caller.id()
                );
                Err(AuthError::AccessDenied)
            }
        }
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(header) = parts.headers.get(AUTHORIZATION) {
            let token = header
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or(AuthError::InvalidToken)?;
            let user = state.tokens.verify(token.trim())?;
            return Ok(Caller::user(user));
        }

        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;
        let user = AuthSession::new(&session).get_user().await?;

        Ok(Caller { user })
    }
}

