use super::*;

/// Tests that uploading replaces the image in the game's existing row.
///
/// Expected: one row per game holding the latest data URL
#[tokio::test]
async fn replaces_image_in_place() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = ImageRepository::new(db);
    let original = repo.find_by_game(game.id).await?.unwrap();

    repo.upsert(game.id, "data:image/png;base64,AAAA".to_string())
        .await?;
    let image = repo
        .upsert(game.id, "data:image/gif;base64,BBBB".to_string())
        .await?;

    assert_eq!(image.id, original.id);
    assert_eq!(
        image.base64_image.as_deref(),
        Some("data:image/gif;base64,BBBB")
    );
    assert_eq!(entity::prelude::Image::find().count(db).await?, 1);

    Ok(())
}
