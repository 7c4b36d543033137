use super::*;
use uuid::Uuid;

/// Tests that only the requested games are returned and unknown ids are skipped.
///
/// Expected: Ok with the two existing games
#[tokio::test]
async fn returns_existing_requested_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let first = factory::create_game_in_genre(db, genre.id).await?;
    let second = factory::create_game_in_genre(db, genre.id).await?;
    factory::create_game_in_genre(db, genre.id).await?;

    let games = GameRepository::new(db)
        .get_by_ids(&[first.id, second.id, Uuid::new_v4()], &IncludeTree::empty())
        .await?;

    assert_eq!(games.len(), 2);
    assert!(games.iter().any(|g| g.id == first.id));
    assert!(games.iter().any(|g| g.id == second.id));

    Ok(())
}

/// Tests requesting no ids.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let games = GameRepository::new(db)
        .get_by_ids(&[], &IncludeTree::empty())
        .await?;

    assert!(games.is_empty());

    Ok(())
}
