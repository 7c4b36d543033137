use super::*;
use uuid::Uuid;

/// Tests adding and removing likes.
///
/// Expected: count goes up and back down
#[tokio::test]
async fn adjusts_like_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let game = factory::game::GameFactory::new(db, genre.id)
        .likes(2)
        .build()
        .await?;
    let repo = GameRepository::new(db);

    assert_eq!(repo.add_likes(game.id, 1).await?, Some(3));
    assert_eq!(repo.add_likes(game.id, -1).await?, Some(2));

    let stored = repo.find_model(game.id).await?.unwrap();
    assert_eq!(stored.likes, 2);

    Ok(())
}

/// Tests that likes never go below zero.
///
/// Expected: Some(0) and a stored count of 0
#[tokio::test]
async fn never_goes_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = GameRepository::new(db);

    assert_eq!(repo.add_likes(game.id, -1).await?, Some(0));
    assert_eq!(repo.find_model(game.id).await?.unwrap().likes, 0);

    Ok(())
}

/// Tests liking an unknown game.
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

    assert_eq!(
        GameRepository::new(db).add_likes(Uuid::new_v4(), 1).await?,
        None
    );

    Ok(())
}
