use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: i32,
    pub rating: f64,
    pub review_date: DateTimeUtc,
    pub reviewer_name: String,
    pub review_title: String,
    #[sea_orm(column_type = "Text")]
    pub review_body: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::application_user::Entity",
        from = "Column::UserId",
        to = "super::application_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationUser,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::application_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
