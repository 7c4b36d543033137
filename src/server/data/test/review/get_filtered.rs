use super::*;

/// Tests paging through a game's reviews.
///
/// Expected: newest first, second page holds the oldest review
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let mut ids = Vec::new();
    for days in 0..3 {
        let review = factory::review::ReviewFactory::new(db, game.id, user.id)
            .review_date(now - Duration::days(days))
            .build()
            .await?;
        ids.push(review.id);
    }
    let repo = ReviewRepository::new(db);

    let first = repo
        .get_filtered(&ReviewFilter {
            per_page: 2,
            ..filter(game.id)
        })
        .await?;
    let second = repo
        .get_filtered(&ReviewFilter {
            per_page: 2,
            page: 1,
            ..filter(game.id)
        })
        .await?;

    assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), ids[..2].to_vec());
    assert_eq!(second.iter().map(|r| r.id).collect::<Vec<_>>(), vec![ids[2]]);

    Ok(())
}

/// Tests that date bounds may be given in either order.
///
/// Expected: same single review for both orders
#[tokio::test]
async fn accepts_date_bounds_in_either_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    factory::review::ReviewFactory::new(db, game.id, user.id)
        .review_date(now - Duration::days(30))
        .build()
        .await?;
    let recent = factory::review::ReviewFactory::new(db, game.id, user.id)
        .review_date(now - Duration::days(1))
        .build()
        .await?;
    let repo = ReviewRepository::new(db);
    let early = now - Duration::days(7);

    let forward = repo
        .get_filtered(&ReviewFilter {
            first_date: Some(early),
            second_date: Some(now),
            ..filter(game.id)
        })
        .await?;
    let reversed = repo
        .get_filtered(&ReviewFilter {
            first_date: Some(now),
            second_date: Some(early),
            ..filter(game.id)
        })
        .await?;

    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].id, recent.id);
    assert_eq!(reversed, forward);

    Ok(())
}

/// Tests the inclusive rating bounds.
///
/// Expected: ratings 2 and 3 within [2, 3], 1 and 5 excluded
#[tokio::test]
async fn applies_rating_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    for rating in [1.0, 2.0, 3.0, 5.0] {
        factory::review::ReviewFactory::new(db, game.id, user.id)
            .rating(rating)
            .build()
            .await?;
    }

    let reviews = ReviewRepository::new(db)
        .get_filtered(&ReviewFilter {
            min_rating: 2.0,
            max_rating: 3.0,
            ..filter(game.id)
        })
        .await?;

    let mut ratings: Vec<f64> = reviews.iter().map(|r| r.rating).collect();
    ratings.sort_by(f64::total_cmp);
    assert_eq!(ratings, vec![2.0, 3.0]);

    Ok(())
}

/// Tests that reviews of other games and deleted reviews are excluded.
///
/// Expected: only the active review of the requested game
#[tokio::test]
async fn excludes_other_games_and_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let kept = factory::create_review(db, game.id, user.id).await?;
    factory::create_review(db, other.id, user.id).await?;
    factory::review::ReviewFactory::new(db, game.id, user.id)
        .deleted()
        .build()
        .await?;

    let reviews = ReviewRepository::new(db).get_filtered(&filter(game.id)).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, kept.id);

    Ok(())
}
