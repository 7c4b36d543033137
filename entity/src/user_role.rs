use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "user_role")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_role")]
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_user::Entity",
        from = "Column::UserId",
        to = "super::application_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationUser,
}

impl Related<super::application_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
