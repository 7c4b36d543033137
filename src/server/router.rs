use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::operation::{application_user_service, game, game_service, genre, login_service, review_service, tag},
    server::{
        controller::{
            application_user as application_user_ctl, game as game_ctl, genre as genre_ctl,
            login as login_ctl, review as review_ctl, tag as tag_ctl,
        },
        state::AppState,
    },
};

pub const OPENAPI_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        game_ctl::get_games,
        game_ctl::get_games_from_ids,
        game_ctl::get_game_details,
        game_ctl::get_game_image,
        game_ctl::upload_game_image,
        game_ctl::get_all_tags,
        game_ctl::get_game_tags,
        game_ctl::set_game_tags,
        game_ctl::add_like,
        game_ctl::remove_like,
        game_ctl::save_game,
        review_ctl::get_reviews,
        review_ctl::add_review,
        review_ctl::delete_review,
        login_ctl::login,
        login_ctl::get_token,
        login_ctl::logout,
        login_ctl::create_account,
        login_ctl::change_password,
        login_ctl::is_logged_in,
        login_ctl::get_user_info,
        application_user_ctl::get_roles,
        application_user_ctl::has_role,
        application_user_ctl::get_user_reviews,
        genre_ctl::get_genre,
        genre_ctl::list_genres,
        genre_ctl::save_genre,
        genre_ctl::delete_genre,
        tag_ctl::get_tag,
        tag_ctl::list_tags,
        tag_ctl::save_tag,
        tag_ctl::delete_tag,
    ),
    tags(
        (name = "game", description = "Catalog browsing, tagging, likes and images"),
        (name = "review", description = "Game reviews"),
        (name = "login", description = "Sign-in, tokens and accounts"),
        (name = "application_user", description = "Queries about the calling user"),
        (name = "genre", description = "Genre maintenance"),
        (name = "tag", description = "Tag maintenance"),
    )
)]
pub struct ApiDoc;

/// Builds the route table, one `POST` route per remote operation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(&game_service::GET_GAMES.path(), post(game_ctl::get_games))
        .route(
            &game_service::GET_GAMES_FROM_IDS.path(),
            post(game_ctl::get_games_from_ids),
        )
        .route(
            &game_service::GET_GAME_DETAILS.path(),
            post(game_ctl::get_game_details),
        )
        .route(
            &game_service::GET_GAME_IMAGE.path(),
            post(game_ctl::get_game_image),
        )
        .route(
            &game_service::UPLOAD_GAME_IMAGE.path(),
            post(game_ctl::upload_game_image),
        )
        .route(&game_service::GET_ALL_TAGS.path(), post(game_ctl::get_all_tags))
        .route(
            &game_service::GET_GAME_TAGS.path(),
            post(game_ctl::get_game_tags),
        )
        .route(
            &game_service::SET_GAME_TAGS.path(),
            post(game_ctl::set_game_tags),
        )
        .route(&game_service::ADD_LIKE.path(), post(game_ctl::add_like))
        .route(&game_service::REMOVE_LIKE.path(), post(game_ctl::remove_like))
        .route(&game::SAVE.path(), post(game_ctl::save_game))
        .route(&review_service::GET_REVIEWS.path(), post(review_ctl::get_reviews))
        .route(&review_service::ADD_REVIEW.path(), post(review_ctl::add_review))
        .route(
            &review_service::DELETE_REVIEW.path(),
            post(review_ctl::delete_review),
        )
        .route(&login_service::LOGIN.path(), post(login_ctl::login))
        .route(&login_service::GET_TOKEN.path(), post(login_ctl::get_token))
        .route(&login_service::LOGOUT.path(), post(login_ctl::logout))
        .route(
            &login_service::CREATE_ACCOUNT.path(),
            post(login_ctl::create_account),
        )
        .route(
            &login_service::CHANGE_PASSWORD.path(),
            post(login_ctl::change_password),
        )
        .route(&login_service::IS_LOGGED_IN.path(), post(login_ctl::is_logged_in))
        .route(
            &login_service::GET_USER_INFO.path(),
            post(login_ctl::get_user_info),
        )
        .route(
            &application_user_service::GET_ROLES.path(),
            post(application_user_ctl::get_roles),
        )
        .route(
            &application_user_service::HAS_ROLE.path(),
            post(application_user_ctl::has_role),
        )
        .route(
            &application_user_service::GET_USER_REVIEWS.path(),
            post(application_user_ctl::get_user_reviews),
        )
        .route(&genre::GET.path(), post(genre_ctl::get_genre))
        .route(&genre::LIST.path(), post(genre_ctl::list_genres))
        .route(&genre::SAVE.path(), post(genre_ctl::save_genre))
        .route(&genre::DELETE.path(), post(genre_ctl::delete_genre))
        .route(&tag::GET.path(), post(tag_ctl::get_tag))
        .route(&tag::LIST.path(), post(tag_ctl::list_tags))
        .route(&tag::SAVE.path(), post(tag_ctl::save_tag))
        .route(&tag::DELETE.path(), post(tag_ctl::delete_tag))
        .route(OPENAPI_PATH, get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
