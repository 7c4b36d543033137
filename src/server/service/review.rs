//! Review service: listing, writing and soft-deleting reviews.
//!
//! Adding or deleting a review recalculates the game's rating statistics from its
//! remaining non-deleted reviews.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        api::ItemResult,
        operation::{review_service, Role},
        params::{AddReviewParams, GetReviewsParams},
        review::ReviewDto,
    },
    server::{
        data::{game::GameRepository, review::ReviewRepository},
        error::{auth::AuthError, AppError},
        mapping::{map_collection, map_to_dto, IncludeTree, MappingContext},
        middleware::auth::Caller,
        model::review::{CreateReviewParams, ReviewFilter},
    },
};

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;

const MSG_GAME_NOT_FOUND: &str = "Unable to find the requested game";
const MSG_REVIEW_NOT_FOUND: &str = "Unable to find the review.";
const MSG_NOT_OWNER: &str = "You can only delete your own reviews.";
const MSG_BAD_PAGE: &str = "Page and reviews per page must be at least 1.";
const MSG_BAD_RATING_RANGE: &str = "The rating range must be within 0 to 5.";
const MSG_BAD_RATING: &str = "Rating must be between 0 and 5.";
const MSG_MISSING_TITLE: &str = "A review title is required.";

pub struct ReviewService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a game's reviews, newest first.
    ///
    /// # Arguments
    /// - `params` - Game, optional date bounds in either order, 1-based page, page size
    ///   and inclusive rating bounds
    ///
    /// # Returns
    /// - `Ok(success(reviews))` - Matching reviews, an empty list when none match
    /// - `Ok(failure)` - Invalid page selection or rating range
    pub async fn get_reviews(
        &self,
        caller: &Caller,
        params: &GetReviewsParams,
    ) -> Result<ItemResult<Vec<ReviewDto>>, AppError> {
        review_service::GET_REVIEWS.authorize(caller)?;

        if params.page < 1 || params.reviews_per_page < 1 {
            return Ok(ItemResult::failure(MSG_BAD_PAGE));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&params.min_rating)
            || !(MIN_RATING..=MAX_RATING).contains(&params.max_rating)
            || params.min_rating > params.max_rating
        {
            return Ok(ItemResult::failure(MSG_BAD_RATING_RANGE));
        }

        let filter = ReviewFilter {
            game_id: params.game_id,
            first_date: params.first_date,
            second_date: params.second_date,
            min_rating: params.min_rating,
            max_rating: params.max_rating,
            page: params.page - 1,
            per_page: params.reviews_per_page,
        };
        let reviews = ReviewRepository::new(self.db).get_filtered(&filter).await?;

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(
            &reviews,
            &ctx,
            &IncludeTree::empty(),
        )))
    }

    /// Writes a review by the caller.
    ///
    /// The reviewer name is taken from the caller, never from the request.
    pub async fn add_review(
        &self,
        caller: &Caller,
        params: AddReviewParams,
    ) -> Result<ItemResult<ReviewDto>, AppError> {
        review_service::ADD_REVIEW.authorize(caller)?;
        let user = caller.user.as_ref().ok_or(AuthError::NotAuthenticated)?;

        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Ok(ItemResult::failure(MSG_BAD_RATING));
        }
        if params.review_title.trim().is_empty() {
            return Ok(ItemResult::failure(MSG_MISSING_TITLE));
        }
        if !GameRepository::new(self.db).exists(params.game_id).await? {
            return Ok(ItemResult::failure(MSG_GAME_NOT_FOUND));
        }

        let review = ReviewRepository::new(self.db)
            .create(CreateReviewParams {
                game_id: params.game_id,
                user_id: user.id,
                rating: params.rating,
                reviewer_name: user.name.clone(),
                review_title: params.review_title.trim().to_string(),
                review_body: params.review_body,
            })
            .await?;

        self.recalculate_stats(review.game_id).await?;

        tracing::info!(
            "User {} reviewed game {} with rating {}",
            user.id,
            review.game_id,
            review.rating
        );

        let ctx = MappingContext::new(caller.clone());
        let dto = map_to_dto(Some(&review), &ctx, &IncludeTree::empty());
        Ok(dto.map_or_else(|| ItemResult::failure(MSG_REVIEW_NOT_FOUND), ItemResult::success))
    }

    /// Soft-deletes a review. Only its author or a SuperAdmin may delete it.
    pub async fn delete_review(
        &self,
        caller: &Caller,
        review_id: Uuid,
    ) -> Result<ItemResult, AppError> {
        review_service::DELETE_REVIEW.authorize(caller)?;

        let repo = ReviewRepository::new(self.db);
        let Some(review) = repo.find_active(review_id).await? else {
            return Ok(ItemResult::failure(MSG_REVIEW_NOT_FOUND));
        };

        if caller.id() != Some(review.user_id) && !caller.is_in_role(Role::SuperAdmin) {
            return Ok(ItemResult::failure(MSG_NOT_OWNER));
        }

        repo.soft_delete(review.id).await?;
        self.recalculate_stats(review.game_id).await?;

        tracing::info!("Deleted review {} of game {}", review.id, review.game_id);

        Ok(ItemResult::ok())
    }

    async fn recalculate_stats(&self, game_id: Uuid) -> Result<(), AppError> {
        let (count, average) = ReviewRepository::new(self.db).rating_stats(game_id).await?;

        GameRepository::new(self.db)
            .set_rating_stats(game_id, count, average)
            .await?;

        Ok(())
    }
}
