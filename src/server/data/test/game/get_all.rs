use super::*;

/// Tests that games are listed by name.
///
/// Expected: Ok with games in name order
#[tokio::test]
async fn returns_games_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    factory::game::GameFactory::new(db, genre.id)
        .name("Wingspan")
        .build()
        .await?;
    factory::game::GameFactory::new(db, genre.id)
        .name("Azul")
        .build()
        .await?;

    let games = GameRepository::new(db)
        .get_all(&IncludeTree::empty())
        .await?;

    let names: Vec<_> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Azul", "Wingspan"]);

    Ok(())
}

/// Tests that relationships are only loaded when the tree names them.
///
/// Expected: genre and tags loaded, image and reviews left unloaded
#[tokio::test]
async fn loads_requested_relationships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, tags) = factory::helpers::create_tagged_game(db, 2).await?;

    let games = GameRepository::new(db)
        .get_all(&IncludeTree::parse("genre,gameTags.tag"))
        .await?;

    assert_eq!(games.len(), 1);
    let loaded = &games[0];
    assert_eq!(loaded.id, game.id);
    assert_eq!(loaded.genre.as_ref().map(|g| g.id), Some(game.genre_id));
    assert!(loaded.image.is_none());
    assert!(loaded.reviews.is_none());

    let game_tags = loaded.game_tags.as_ref().unwrap();
    assert_eq!(game_tags.len(), 2);
    assert_eq!(
        game_tags[0].tag.as_ref().map(|t| t.name.clone()),
        Some(tags[0].name.clone())
    );

    Ok(())
}

/// Tests that an included collection with no rows is loaded as empty.
///
/// Expected: Some(empty) game tags
#[tokio::test]
async fn loads_empty_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let games = GameRepository::new(db)
        .get_all(&IncludeTree::parse("gameTags"))
        .await?;

    assert_eq!(games[0].game_tags, Some(Vec::new()));

    Ok(())
}

/// Tests listing an empty catalog.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let games = GameRepository::new(db)
        .get_all(&IncludeTree::empty())
        .await?;

    assert!(games.is_empty());

    Ok(())
}
