use crate::server::{data::review::ReviewRepository, model::review::ReviewFilter};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_filtered;
mod rating_stats;
mod soft_delete;

fn filter(game_id: Uuid) -> ReviewFilter {
    ReviewFilter {
        game_id,
        first_date: None,
        second_date: None,
        min_rating: 0.0,
        max_rating: 5.0,
        page: 0,
        per_page: 10,
    }
}
