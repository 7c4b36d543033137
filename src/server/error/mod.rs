//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of every handler and service. Business outcomes such
//! as a missing record or a rejected input never travel through it; those are successful
//! returns carrying a failed `ItemResult`. What remains here is authorization failures,
//! malformed requests, and unexpected faults from the database, session store or token
//! layer. Every variant renders as an `ItemResult` body so the client always decodes the
//! same envelope.

pub mod auth;
pub mod config;
pub mod mapping;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ItemResult,
    server::error::{auth::AuthError, config::ConfigError, mapping::MappingError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so `?` converts the underlying error. `AuthError` handles
/// its own status mapping, everything unexpected becomes a 500 with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Transfer object could not be applied to a persisted row.
    ///
    /// Results in 400 Bad Request with the mapping message.
    #[error(transparent)]
    MappingErr(#[from] MappingError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Token encoding or decoding error.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged, a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<axum::extract::multipart::MultipartRejection> for AppError {
    fn from(rejection: axum::extract::multipart::MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `MappingErr`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ItemResult::<()>::failure(msg)),
            )
                .into_response(),
            Self::MappingErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ItemResult::<()>::failure(err.to_string())),
            )
                .into_response(),
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic "Internal server error" envelope to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ItemResult::<()>::failure("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod test;
