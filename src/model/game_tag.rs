use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{tag::TagDto, tracked::Tracked};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Join row between a game and one of its tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct GameTagDto {
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub id: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Uuid>))]
    pub game_id: Tracked<Uuid>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub tag_id: Tracked<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagDto>,
}
