use crate::{
    model::tag::TagDto,
    server::{
        error::mapping::MappingError,
        mapping::{apply_identity, apply_optional, apply_required, IncludeTree, MapFrom, MapTo, MappingContext},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl MapFrom<Tag> for TagDto {
    fn map_from(&mut self, obj: &Tag, _ctx: &MappingContext, _tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.name.load(Some(obj.name.clone()));
        self.description.load(obj.description.clone());
    }
}

impl MapTo<entity::tag::ActiveModel> for TagDto {
    fn map_to(
        &self,
        entity: &mut entity::tag::ActiveModel,
        _ctx: &MappingContext,
    ) -> Result<(), MappingError> {
        apply_identity(&self.id, &mut entity.id);
        apply_required(&self.name, "name", &mut entity.name)?;
        apply_optional(&self.description, &mut entity.description);
        Ok(())
    }
}
