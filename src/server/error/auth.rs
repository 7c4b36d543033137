use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ItemResult;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The operation requires a signed-in caller and none was resolved.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("You must be signed in to perform this action.")]
    NotAuthenticated,

    /// The caller is signed in but holds none of the roles the operation requires.
    ///
    /// Results in a 403 Forbidden response.
    #[error("You do not have permission to perform this action.")]
    AccessDenied,

    /// A bearer token was supplied but failed validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("The supplied token is invalid or expired.")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `InvalidToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// The body is always a failed `ItemResult` carrying the error message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotAuthenticated | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::AccessDenied => StatusCode::FORBIDDEN,
        };

        tracing::debug!("Rejected request: {}", self);

        (status, Json(ItemResult::<()>::failure(self.to_string()))).into_response()
    }
}
