//! Review fixtures.

use chrono::{TimeZone, Utc};
use entity::review;
use uuid::Uuid;

/// Creates a review of `game_id` by user `1`, dated 2024-05-01.
pub fn entity(game_id: Uuid) -> review::Model {
    review::Model {
        id: Uuid::new_v4(),
        game_id,
        user_id: 1,
        rating: 4.0,
        review_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        reviewer_name: "Reviewer".to_string(),
        review_title: "Solid".to_string(),
        review_body: "Plays well at three.".to_string(),
        is_deleted: false,
    }
}
