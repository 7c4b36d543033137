use axum::{extract::State, response::IntoResponse};

use crate::{
    model::params::RoleParams,
    server::{
        error::AppError, extract::Json, middleware::auth::Caller,
        service::application_user::ApplicationUserService, state::AppState,
    },
};

pub static APPLICATION_USER_TAG: &str = "application_user";

#[utoipa::path(
    post,
    path = "/api/ApplicationUserService/GetRoles",
    tag = APPLICATION_USER_TAG,
    responses(
        (status = 200, description = "Role names held by the caller"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = ApplicationUserService::new(&state.db).get_roles(&caller)?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/ApplicationUserService/HasRole",
    tag = APPLICATION_USER_TAG,
    responses(
        (status = 200, description = "Success when the caller holds the role"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn has_role(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<RoleParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = ApplicationUserService::new(&state.db).has_role(&caller, &params.role)?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/ApplicationUserService/GetUserReviews",
    tag = APPLICATION_USER_TAG,
    responses(
        (status = 200, description = "Ids of the caller's reviews"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = ApplicationUserService::new(&state.db)
        .get_user_reviews(&caller)
        .await?;

    Ok(Json(result))
}
