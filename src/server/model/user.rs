use crate::{
    model::user::ApplicationUserDto,
    server::mapping::{IncludeTree, MapFrom, MappingContext},
};

/// Account without its credential columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl ApplicationUser {
    pub fn from_entity(entity: entity::application_user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

impl MapFrom<ApplicationUser> for ApplicationUserDto {
    fn map_from(&mut self, obj: &ApplicationUser, ctx: &MappingContext, _tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.name.load(Some(obj.name.clone()));
        if ctx.is_self_or_admin(obj.id) {
            self.email.load(Some(obj.email.clone()));
        }
    }
}

/// Parameters for creating an account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
