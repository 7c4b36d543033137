use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::*;

async fn envelope(response: Response) -> ItemResult {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Tests that a malformed request renders as a failed envelope.
///
/// Expected: 400 with the rejection message
#[tokio::test]
async fn bad_request_is_envelope() {
    let response = AppError::BadRequest("missing field `gameId`".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let result = envelope(response).await;
    assert!(!result.was_successful);
    assert_eq!(result.message.as_deref(), Some("missing field `gameId`"));
}

/// Tests that internal error details stay on the server.
///
/// Expected: 500 with the generic message only
#[tokio::test]
async fn internal_error_hides_detail() {
    let response = AppError::InternalError("session store unreachable".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let result = envelope(response).await;
    assert!(!result.was_successful);
    assert_eq!(result.message.as_deref(), Some("Internal server error"));
}

/// Tests that authorization failures keep their own status.
///
/// Expected: 401 for a missing sign-in
#[tokio::test]
async fn auth_error_keeps_status() {
    let response = AppError::from(AuthError::NotAuthenticated).into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!envelope(response).await.was_successful);
}
