use super::*;
use uuid::Uuid;

/// Tests loading one game with its details tree.
///
/// Expected: reviews loaded newest first, deleted reviews left out
#[tokio::test]
async fn loads_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let now = chrono::Utc::now();
    let older = factory::review::ReviewFactory::new(db, game.id, user.id)
        .review_date(now - chrono::Duration::days(2))
        .build()
        .await?;
    let newer = factory::review::ReviewFactory::new(db, game.id, user.id)
        .review_date(now)
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, game.id, user.id)
        .deleted()
        .build()
        .await?;

    let loaded = GameRepository::new(db)
        .find_by_id(game.id, &IncludeTree::parse("genre,reviews"))
        .await?
        .unwrap();

    let ids: Vec<_> = loaded.reviews.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(loaded.genre.is_some());

    Ok(())
}

/// Tests loading a game's image row.
///
/// Expected: the empty image row created with the game
#[tokio::test]
async fn loads_image_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let loaded = GameRepository::new(db)
        .find_by_id(game.id, &IncludeTree::parse("image"))
        .await?
        .unwrap();

    let image = loaded.image.unwrap();
    assert_eq!(image.game_id, game.id);
    assert!(image.base64_image.is_none());

    Ok(())
}

/// Tests looking up an unknown game.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo
        .find_by_id(Uuid::new_v4(), &IncludeTree::empty())
        .await?
        .is_none());
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}
