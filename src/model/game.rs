use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    game_tag::GameTagDto, genre::GenreDto, image::ImageDto, review::ReviewDto, tracked::Tracked,
};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Transfer representation of a game.
///
/// Relationship fields are `None` unless the caller's include tree named them. An included
/// collection is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct GameDto {
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Uuid>))]
    pub id: Tracked<Uuid>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub name: Tracked<String>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Tracked<String>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<DateTime<Utc>>))]
    pub release_date: Tracked<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub likes: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub number_of_ratings: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<f64>))]
    pub average_rating: Tracked<f64>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<f64>))]
    pub average_duration_in_hours: Tracked<f64>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub min_players: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub max_players: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub genre_id: Tracked<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_tags: Option<Vec<GameTagDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewDto>>,
}
