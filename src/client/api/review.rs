use uuid::Uuid;

use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::{
        api::ItemResult,
        operation::review_service,
        params::{AddReviewParams, GetReviewsParams, ReviewIdParams},
        review::ReviewDto,
    },
};

pub struct ReviewServiceClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ReviewServiceClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_reviews(
        &self,
        params: &GetReviewsParams,
    ) -> Result<ItemResult<Vec<ReviewDto>>, ApiError> {
        self.api.invoke(&review_service::GET_REVIEWS, params).await
    }

    pub async fn add_review(
        &self,
        game_id: Uuid,
        review_title: &str,
        review_body: &str,
        rating: f64,
    ) -> Result<ItemResult<ReviewDto>, ApiError> {
        let params = AddReviewParams {
            game_id,
            review_title: review_title.to_string(),
            review_body: review_body.to_string(),
            rating,
        };
        self.api.invoke(&review_service::ADD_REVIEW, &params).await
    }

    pub async fn delete_review(&self, review_id: Uuid) -> Result<ItemResult, ApiError> {
        self.api
            .invoke(&review_service::DELETE_REVIEW, &ReviewIdParams { review_id })
            .await
    }
}
