use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tracked::Tracked;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Uuid>))]
    pub id: Tracked<Uuid>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Uuid>))]
    pub game_id: Tracked<Uuid>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub user_id: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<f64>))]
    pub rating: Tracked<f64>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<DateTime<Utc>>))]
    pub review_date: Tracked<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub reviewer_name: Tracked<String>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub review_title: Tracked<String>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub review_body: Tracked<String>,
}
