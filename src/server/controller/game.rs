use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    model::{
        game::GameDto,
        params::{GameIdParams, GameIdsParams, SetGameTagsParams},
    },
    server::{
        error::AppError, extract::Json, middleware::auth::Caller, service::game::GameService,
        state::AppState,
    },
};

pub static GAME_TAG: &str = "game";

#[utoipa::path(
    post,
    path = "/api/GameService/GetGames",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Every game with its genre and tags"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db).get_games(&caller).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/GetGamesFromIds",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The requested games that exist, in name order"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_games_from_ids(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdsParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .get_games_from_ids(&caller, &params.game_ids)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/GetGameDetails",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The game with its genre, tags and reviews"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_game_details(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .get_game_details(&caller, params.game_id)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/GetGameImage",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The game's image as a data URL"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_game_image(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .get_game_image(&caller, params.game_id)
        .await?;

    Ok(Json(result))
}

/// Multipart upload with a `gameId` text field and an `image` file field.
#[utoipa::path(
    post,
    path = "/api/GameService/UploadGameImage",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The stored image"),
        (status = 400, description = "Malformed multipart body or game id"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn upload_game_image(
    State(state): State<AppState>,
    caller: Caller,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart?;
    let mut game_id = None;
    let mut image = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "gameId" => {
                let text = field.text().await?;
                let id = Uuid::parse_str(text.trim())
                    .map_err(|e| AppError::BadRequest(format!("Invalid game id: {}", e)))?;
                game_id = Some(id);
            }
            "image" => image = field.bytes().await?.to_vec(),
            _ => {}
        }
    }

    let game_id =
        game_id.ok_or_else(|| AppError::BadRequest("Missing 'gameId' field".to_string()))?;

    let result = GameService::new(&state.db)
        .upload_game_image(&caller, game_id, &image)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/GetAllTags",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Every tag in name order"),
        (status = 401, description = "User not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_all_tags(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db).get_all_tags(&caller).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/GetGameTags",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The game's tag links with their tags"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_game_tags(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .get_game_tags(&caller, params.game_id)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/SetGameTags",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Tag links replaced"),
        (status = 401, description = "User not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn set_game_tags(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<SetGameTagsParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .set_game_tags(&caller, params.game_id, &params.tag_ids)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/AddLike",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Like recorded"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn add_like(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .add_like(&caller, params.game_id)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/GameService/RemoveLike",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Like removed"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn remove_like(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GameIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db)
        .remove_like(&caller, params.game_id)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/Game/save",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "The saved game"),
        (status = 401, description = "User not authenticated"),
        (status = 403, description = "User is not a super admin"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn save_game(
    State(state): State<AppState>,
    caller: Caller,
    Json(dto): Json<GameDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameService::new(&state.db).save(&caller, &dto).await?;

    Ok(Json(result))
}
