use super::*;

/// Tests paging through genres.
///
/// Expected: page 1 of size 2 holds the third genre, total counts all
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::create_genre(db).await?.id);
    }

    let (genres, total) = GenreRepository::new(db).get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(genres.iter().map(|g| g.id).collect::<Vec<_>>(), vec![ids[2]]);

    Ok(())
}
