use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::params::{ChangePasswordParams, CreateAccountParams, CredentialsParams},
    server::{
        error::AppError,
        extract::Json,
        middleware::{auth::Caller, session::AuthSession},
        service::login::LoginService,
        state::AppState,
    },
};

pub static LOGIN_TAG: &str = "login";

#[utoipa::path(
    post,
    path = "/api/LoginService/Login",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Session signed in, or a failure for bad credentials"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    caller: Caller,
    session: Session,
    Json(params): Json<CredentialsParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens)
        .login(
            &caller,
            &AuthSession::new(&session),
            &params.email,
            &params.password,
        )
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/GetToken",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "A bearer token for the credentials"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_token(
    State(state): State<AppState>,
    caller: Caller,
    session: Session,
    Json(params): Json<CredentialsParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens)
        .get_token(
            &caller,
            &AuthSession::new(&session),
            &params.email,
            &params.password,
        )
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/Logout",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    caller: Caller,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens)
        .logout(&caller, &AuthSession::new(&session))
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/CreateAccount",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Account created, or a failure listing what was wrong"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<CreateAccountParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens)
        .create_account(&caller, &params.name, &params.email, &params.password)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/ChangePassword",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Password changed"),
        (status = 401, description = "User not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<ChangePasswordParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens)
        .change_password(&caller, &params.current_password, &params.new_password)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/IsLoggedIn",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Success when the caller is signed in"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn is_logged_in(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens).is_logged_in(&caller)?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/LoginService/GetUserInfo",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Name, email and roles of the caller"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_user_info(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = LoginService::new(&state.db, &state.tokens).get_user_info(&caller)?;

    Ok(Json(result))
}
