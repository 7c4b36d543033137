use axum::{extract::State, response::IntoResponse};

use crate::{
    model::params::{AddReviewParams, GetReviewsParams, ReviewIdParams},
    server::{
        error::AppError, extract::Json, middleware::auth::Caller,
        service::review::ReviewService, state::AppState,
    },
};

pub static REVIEW_TAG: &str = "review";

#[utoipa::path(
    post,
    path = "/api/ReviewService/GetReviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "One page of the game's reviews, newest first"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<GetReviewsParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = ReviewService::new(&state.db)
        .get_reviews(&caller, &params)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/ReviewService/AddReview",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "The created review"),
        (status = 401, description = "User not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<AddReviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = ReviewService::new(&state.db)
        .add_review(&caller, params)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/ReviewService/DeleteReview",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Review deleted"),
        (status = 401, description = "User not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<ReviewIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = ReviewService::new(&state.db)
        .delete_review(&caller, params.review_id)
        .await?;

    Ok(Json(result))
}
