use uuid::Uuid;

use crate::{
    model::{game_tag::GameTagDto, tag::TagDto},
    server::{
        mapping::{map_reference, IncludeTree, MapFrom, MappingContext},
        model::tag::Tag,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameTag {
    pub id: i32,
    pub game_id: Uuid,
    pub tag_id: i32,
    /// `None` until loaded.
    pub tag: Option<Tag>,
}

impl GameTag {
    pub fn from_entity(entity: entity::game_tag::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            tag_id: entity.tag_id,
            tag: None,
        }
    }
}

impl MapFrom<GameTag> for GameTagDto {
    fn map_from(&mut self, obj: &GameTag, ctx: &MappingContext, tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.game_id.load(Some(obj.game_id));
        self.tag_id.load(Some(obj.tag_id));
        self.tag = map_reference::<Tag, TagDto>("tag", obj.tag.as_ref(), ctx, tree);
    }
}
