use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        genre::GenreDto,
        params::{IdParams, ListParams},
    },
    server::{
        error::AppError, extract::Json, middleware::auth::Caller, service::genre::GenreService,
        state::AppState,
    },
};

pub static GENRE_TAG: &str = "genre";

#[utoipa::path(
    post,
    path = "/api/Genre/get",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "The genre, or a failure when it does not exist"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_genre(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GenreService::new(&state.db).get(&caller, params.id).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Genre/list",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "One page of genres ordered by id"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn list_genres(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GenreService::new(&state.db).list(&caller, &params).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Genre/save",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "The saved genre"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn save_genre(
    State(state): State<AppState>,
    caller: Caller,
    Json(dto): Json<GenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = GenreService::new(&state.db).save(&caller, &dto).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Genre/delete",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "Genre deleted, or a failure while games still use it"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GenreService::new(&state.db).delete(&caller, params.id).await?;

    Ok(Json(result))
}
