//! Type-safe session management wrapper.
//!
//! The signed-in user is stored in the session as a serialized `AuthUser`, so resolving
//! the caller of a request reads the session store only and never the user tables.

use tower_sessions::Session;

use crate::server::{error::AppError, middleware::auth::AuthUser};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Signs `user` in, rotating the session id first.
    ///
    /// # Returns
    /// - `Ok(())` - User stored in the session
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn sign_in(&self, user: &AuthUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the signed-in user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<AuthUser>, AppError> {
        Ok(self.session.get::<AuthUser>(SESSION_AUTH_USER).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user().await?.is_some())
    }

    /// Removes all session data and deletes the session record.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
