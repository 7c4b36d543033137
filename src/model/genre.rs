use serde::{Deserialize, Serialize};

use super::tracked::Tracked;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct GenreDto {
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub id: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub name: Tracked<String>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Tracked<String>,
}
