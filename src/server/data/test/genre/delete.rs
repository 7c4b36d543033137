use super::*;

/// Tests that a genre with games is reported as in use.
///
/// Expected: in_use true with a game, false once empty
#[tokio::test]
async fn reports_genre_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (genre, _) = factory::helpers::create_game_with_genre(db).await?;
    let empty = factory::create_genre(db).await?;
    let repo = GenreRepository::new(db);

    assert!(repo.in_use(genre.id).await?);
    assert!(!repo.in_use(empty.id).await?);

    Ok(())
}

/// Tests deleting a genre.
///
/// Expected: true for an existing genre, false once it is gone
#[tokio::test]
async fn deletes_existing_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let repo = GenreRepository::new(db);

    assert!(repo.delete(genre.id).await?);
    assert!(!repo.delete(genre.id).await?);
    assert!(repo.find_by_id(genre.id).await?.is_none());

    Ok(())
}
