use uuid::Uuid;

use crate::{
    model::image::ImageDto,
    server::mapping::{IncludeTree, MapFrom, MappingContext},
};

/// Uploaded picture of a game, stored as a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: i32,
    pub game_id: Uuid,
    pub base64_image: Option<String>,
}

impl Image {
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            base64_image: entity.base64_image,
        }
    }
}

impl MapFrom<Image> for ImageDto {
    fn map_from(&mut self, obj: &Image, _ctx: &MappingContext, _tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.game_id.load(Some(obj.game_id));
        self.base64_image.load(obj.base64_image.clone());
    }
}
