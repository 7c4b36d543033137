use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::review::{CreateReviewParams, Review, ReviewFilter};

/// Repository for reviews. Every read filters out soft-deleted rows.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a game's reviews, newest first.
    ///
    /// # Arguments
    /// - `filter` - Game, inclusive date and rating bounds, and page selection
    ///
    /// # Returns
    /// - `Ok(Vec<Review>)` - Matching reviews, empty when none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(&self, filter: &ReviewFilter) -> Result<Vec<Review>, DbErr> {
        let mut query = entity::prelude::Review::find()
            .filter(entity::review::Column::GameId.eq(filter.game_id))
            .filter(entity::review::Column::IsDeleted.eq(false))
            .filter(entity::review::Column::Rating.gte(filter.min_rating))
            .filter(entity::review::Column::Rating.lte(filter.max_rating));

        let (earliest, latest) = match (filter.first_date, filter.second_date) {
            (Some(a), Some(b)) if b < a => (Some(b), Some(a)),
            bounds => bounds,
        };
        if let Some(earliest) = earliest {
            query = query.filter(entity::review::Column::ReviewDate.gte(earliest));
        }
        if let Some(latest) = latest {
            query = query.filter(entity::review::Column::ReviewDate.lte(latest));
        }

        let reviews = query
            .order_by_desc(entity::review::Column::ReviewDate)
            .paginate(self.db, filter.per_page)
            .fetch_page(filter.page)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    /// Inserts a review with a random id dated now.
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(params.game_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            review_date: ActiveValue::Set(Utc::now()),
            reviewer_name: ActiveValue::Set(params.reviewer_name),
            review_title: ActiveValue::Set(params.review_title),
            review_body: ActiveValue::Set(params.review_body),
            is_deleted: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    /// Finds a review that has not been deleted.
    pub async fn find_active(&self, id: Uuid) -> Result<Option<Review>, DbErr> {
        let review = entity::prelude::Review::find_by_id(id)
            .filter(entity::review::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(review.map(Review::from_entity))
    }

    /// Marks a review as deleted. The row is kept.
    pub async fn soft_delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Unchanged(id),
            is_deleted: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Number of non-deleted reviews of a game and their mean rating (0 when none).
    pub async fn rating_stats(&self, game_id: Uuid) -> Result<(i32, f64), DbErr> {
        let ratings: Vec<f64> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::GameId.eq(game_id))
            .filter(entity::review::Column::IsDeleted.eq(false))
            .into_tuple::<f64>()
            .all(self.db)
            .await?;

        if ratings.is_empty() {
            return Ok((0, 0.0));
        }

        let count = ratings.len();
        let average = ratings.iter().sum::<f64>() / count as f64;

        Ok((i32::try_from(count).unwrap_or(i32::MAX), average))
    }

    /// Ids of a user's non-deleted reviews, newest first.
    pub async fn ids_for_user(&self, user_id: i32) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Id)
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::IsDeleted.eq(false))
            .order_by_desc(entity::review::Column::ReviewDate)
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }
}
