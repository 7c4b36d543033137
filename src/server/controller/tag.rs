use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        tag::TagDto,
        params::{IdParams, ListParams},
    },
    server::{
        error::AppError, extract::Json, middleware::auth::Caller, service::tag::TagService,
        state::AppState,
    },
};

pub static TAG_TAG: &str = "tag";

#[utoipa::path(
    post,
    path = "/api/Tag/get",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "The tag, or a failure when it does not exist"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = TagService::new(&state.db).get(&caller, params.id).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Tag/list",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "One page of tags ordered by id"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn list_tags(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = TagService::new(&state.db).list(&caller, &params).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Tag/save",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "The saved tag"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn save_tag(
    State(state): State<AppState>,
    caller: Caller,
    Json(dto): Json<TagDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = TagService::new(&state.db).save(&caller, &dto).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Tag/delete",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Tag deleted along with its game links"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = TagService::new(&state.db).delete(&caller, params.id).await?;

    Ok(Json(result))
}
