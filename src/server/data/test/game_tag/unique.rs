use super::*;

/// Tests that a game cannot carry the same tag twice.
///
/// Expected: second insert of the same pair fails, one link stored
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::create_game_tag(db, game.id, tag.id).await?;

    let duplicate = factory::create_game_tag(db, game.id, tag.id).await;

    assert!(duplicate.is_err());
    let links = GameTagRepository::new(db)
        .get_by_game(game.id, &IncludeTree::empty())
        .await?;
    assert_eq!(links.len(), 1);

    Ok(())
}

/// Tests that the same tag may link to different games.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_tag_on_several_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    let tag = factory::create_tag(db).await?;

    factory::create_game_tag(db, first.id, tag.id).await?;
    factory::create_game_tag(db, second.id, tag.id).await?;

    Ok(())
}
