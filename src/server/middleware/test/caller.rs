use axum::http::header::AUTHORIZATION;
use test_utils::builder::TestBuilder;

use super::*;
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Tests resolving the caller from a bearer token.
///
/// Expected: caller matches the token's user and roles
#[tokio::test]
async fn resolves_bearer_token() -> Result<(), AppError> {
    let state = state();
    let token = state.tokens.issue(&user())?;

    let (mut parts, _) = Request::builder()
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .body(())
        .unwrap()
        .into_parts();

    let caller = Caller::from_request_parts(&mut parts, &state).await?;

    assert_eq!(caller, Caller::user(user()));

    Ok(())
}

/// Tests an invalid bearer token.
///
/// Expected: InvalidToken rather than an anonymous caller
#[tokio::test]
async fn rejects_invalid_bearer_token() {
    let state = state();

    let (mut parts, _) = Request::builder()
        .header(AUTHORIZATION, "Bearer not-a-token")
        .body(())
        .unwrap()
        .into_parts();

    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests a non-bearer authorization scheme.
///
/// Expected: InvalidToken
#[tokio::test]
async fn rejects_other_schemes() {
    let state = state();

    let (mut parts, _) = Request::builder()
        .header(AUTHORIZATION, "Basic YWRhOnNlY3JldA==")
        .body(())
        .unwrap()
        .into_parts();

    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests resolving the caller from the cookie session.
///
/// Expected: anonymous before sign-in, the signed-in user afterwards
#[tokio::test]
async fn resolves_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap().clone();
    let state = state();

    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
    parts.extensions.insert(session.clone());
    let caller = Caller::from_request_parts(&mut parts, &state).await?;
    assert_eq!(caller, Caller::anonymous());

    AuthSession::new(&session).sign_in(&user()).await?;

    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
    parts.extensions.insert(session);
    let caller = Caller::from_request_parts(&mut parts, &state).await?;
    assert_eq!(caller, Caller::user(user()));

    Ok(())
}
