use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Links a game to a tag.
pub async fn create_game_tag(
    db: &DatabaseConnection,
    game_id: Uuid,
    tag_id: i32,
) -> Result<entity::game_tag::Model, DbErr> {
    entity::game_tag::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        tag_id: ActiveValue::Set(tag_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
