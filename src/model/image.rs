use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tracked::Tracked;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ImageDto {
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub id: Tracked<i32>,
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Uuid>))]
    pub game_id: Tracked<Uuid>,
    /// `data:<mime>;base64,<payload>` URL of the uploaded file.
    #[serde(skip_serializing_if = "Tracked::is_omitted")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub base64_image: Tracked<String>,
}
