//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: Uuid,
    user_id: i32,
    rating: f64,
    review_date: DateTime<Utc>,
    reviewer_name: String,
    review_title: String,
    review_body: String,
    is_deleted: bool,
}

impl<'a> ReviewFactory<'a> {
    /// Defaults: rating `4.0`, dated now, title `"Review {id}"`, not deleted.
    pub fn new(db: &'a DatabaseConnection, game_id: Uuid, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            game_id,
            user_id,
            rating: 4.0,
            review_date: Utc::now(),
            reviewer_name: format!("Reviewer {}", id),
            review_title: format!("Review {}", id),
            review_body: "A fine game.".to_string(),
            is_deleted: false,
        }
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn review_date(mut self, review_date: DateTime<Utc>) -> Self {
        self.review_date = review_date;
        self
    }

    pub fn reviewer_name(mut self, reviewer_name: impl Into<String>) -> Self {
        self.reviewer_name = reviewer_name.into();
        self
    }

    pub fn review_title(mut self, review_title: impl Into<String>) -> Self {
        self.review_title = review_title.into();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(self.game_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            review_date: ActiveValue::Set(self.review_date),
            reviewer_name: ActiveValue::Set(self.reviewer_name),
            review_title: ActiveValue::Set(self.review_title),
            review_body: ActiveValue::Set(self.review_body),
            is_deleted: ActiveValue::Set(self.is_deleted),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_review(
    db: &DatabaseConnection,
    game_id: Uuid,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, game_id, user_id).build().await
}
