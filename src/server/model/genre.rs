use crate::{
    model::genre::GenreDto,
    server::{
        error::mapping::MappingError,
        mapping::{apply_identity, apply_optional, apply_required, IncludeTree, MapFrom, MapTo, MappingContext},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Genre {
    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl MapFrom<Genre> for GenreDto {
    fn map_from(&mut self, obj: &Genre, _ctx: &MappingContext, _tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.name.load(Some(obj.name.clone()));
        self.description.load(obj.description.clone());
    }
}

impl MapTo<entity::genre::ActiveModel> for GenreDto {
    fn map_to(
        &self,
        entity: &mut entity::genre::ActiveModel,
        _ctx: &MappingContext,
    ) -> Result<(), MappingError> {
        apply_identity(&self.id, &mut entity.id);
        apply_required(&self.name, "name", &mut entity.name)?;
        apply_optional(&self.description, &mut entity.description);
        Ok(())
    }
}
