use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::review::ReviewDto,
    server::mapping::{IncludeTree, MapFrom, MappingContext},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: i32,
    pub rating: f64,
    pub review_date: DateTime<Utc>,
    pub reviewer_name: String,
    pub review_title: String,
    pub review_body: String,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            user_id: entity.user_id,
            rating: entity.rating,
            review_date: entity.review_date,
            reviewer_name: entity.reviewer_name,
            review_title: entity.review_title,
            review_body: entity.review_body,
        }
    }
}

impl MapFrom<Review> for ReviewDto {
    fn map_from(&mut self, obj: &Review, _ctx: &MappingContext, _tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.game_id.load(Some(obj.game_id));
        self.user_id.load(Some(obj.user_id));
        self.rating.load(Some(obj.rating));
        self.review_date.load(Some(obj.review_date));
        self.reviewer_name.load(Some(obj.reviewer_name.clone()));
        self.review_title.load(Some(obj.review_title.clone()));
        self.review_body.load(Some(obj.review_body.clone()));
    }
}

/// Parameters for inserting a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub game_id: Uuid,
    pub user_id: i32,
    pub rating: f64,
    pub reviewer_name: String,
    pub review_title: String,
    pub review_body: String,
}

/// Filter and page selection for a game's reviews.
///
/// Date bounds are inclusive and may be given in either order. Rating bounds are inclusive.
#[derive(Debug, Clone)]
pub struct ReviewFilter {
    pub game_id: Uuid,
    pub first_date: Option<DateTime<Utc>>,
    pub second_date: Option<DateTime<Utc>>,
    pub min_rating: f64,
    pub max_rating: f64,
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
}
