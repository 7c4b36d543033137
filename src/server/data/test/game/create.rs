use super::*;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

/// Tests that creating a game also creates its empty image row.
///
/// Expected: game persisted, one image row owned by it
#[tokio::test]
async fn creates_game_with_image_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let id = Uuid::new_v4();

    let game = GameRepository::new(db)
        .create(entity::game::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set("Root".to_string()),
            description: ActiveValue::Set(None),
            release_date: ActiveValue::Set(None),
            likes: ActiveValue::Set(0),
            number_of_ratings: ActiveValue::Set(0),
            average_rating: ActiveValue::Set(0.0),
            average_duration_in_hours: ActiveValue::Set(Some(2.0)),
            min_players: ActiveValue::Set(2),
            max_players: ActiveValue::Set(4),
            genre_id: ActiveValue::Set(genre.id),
        })
        .await?;

    assert_eq!(game.id, id);
    assert_eq!(game.name, "Root");

    let images = entity::prelude::Image::find().all(db).await?;
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].game_id, id);

    Ok(())
}
