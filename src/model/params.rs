//! Named parameter bodies of the remote operations.
//!
//! Each operation accepts a JSON object whose keys are its camelCase parameter names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameIdParams {
    pub game_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameIdsParams {
    pub game_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SetGameTagsParams {
    pub game_id: Uuid,
    pub tag_ids: Vec<i32>,
}

fn default_page() -> u64 {
    1
}

fn default_reviews_per_page() -> u64 {
    10
}

fn default_max_rating() -> f64 {
    5.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GetReviewsParams {
    pub game_id: Uuid,
    #[serde(default)]
    pub first_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub second_date: Option<DateTime<Utc>>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_reviews_per_page")]
    pub reviews_per_page: u64,
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

impl GetReviewsParams {
    /// First page of a game's reviews with every filter at its default.
    pub fn for_game(game_id: Uuid) -> Self {
        Self {
            game_id,
            first_date: None,
            second_date: None,
            page: default_page(),
            reviews_per_page: default_reviews_per_page(),
            min_rating: 0.0,
            max_rating: default_max_rating(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AddReviewParams {
    pub game_id: Uuid,
    pub review_title: String,
    pub review_body: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReviewIdParams {
    pub review_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CredentialsParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RoleParams {
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct IdParams {
    pub id: i32,
}

fn default_page_size() -> u64 {
    25
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}
