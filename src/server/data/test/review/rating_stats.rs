use super::*;

/// Tests the statistics over active reviews.
///
/// Expected: two ratings averaging 3.0, the deleted one ignored
#[tokio::test]
async fn averages_active_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    for rating in [2.0, 4.0] {
        factory::review::ReviewFactory::new(db, game.id, user.id)
            .rating(rating)
            .build()
            .await?;
    }
    factory::review::ReviewFactory::new(db, game.id, user.id)
        .rating(0.0)
        .deleted()
        .build()
        .await?;

    let (count, average) = ReviewRepository::new(db).rating_stats(game.id).await?;

    assert_eq!(count, 2);
    assert!((average - 3.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests the statistics of a game without reviews.
///
/// Expected: (0, 0.0)
#[tokio::test]
async fn zero_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    assert_eq!(ReviewRepository::new(db).rating_stats(game.id).await?, (0, 0.0));

    Ok(())
}
