use super::*;

/// Tests that a deleted review is kept but no longer active.
///
/// Expected: find_active returns None, row still present with is_deleted set
#[tokio::test]
async fn keeps_row_and_hides_review() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let review = factory::create_review(db, game.id, user.id).await?;
    let repo = ReviewRepository::new(db);

    assert!(repo.find_active(review.id).await?.is_some());

    repo.soft_delete(review.id).await?;

    assert!(repo.find_active(review.id).await?.is_none());
    let row = entity::prelude::Review::find_by_id(review.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.is_deleted);
    assert!(repo.ids_for_user(user.id).await?.is_empty());

    Ok(())
}
