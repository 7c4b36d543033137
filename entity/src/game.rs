use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_date: Option<DateTimeUtc>,
    pub likes: i32,
    pub number_of_ratings: i32,
    pub average_rating: f64,
    pub average_duration_in_hours: Option<f64>,
    pub min_players: i32,
    pub max_players: i32,
    pub genre_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Genre,
    #[sea_orm(has_one = "super::image::Entity")]
    Image,
    #[sea_orm(has_many = "super::game_tag::Entity")]
    GameTag,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::game_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTag.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_tag::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
