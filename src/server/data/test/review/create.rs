use super::*;
use crate::server::model::review::CreateReviewParams;

/// Tests creating a review.
///
/// Expected: persisted with a fresh id, dated now, listed for its author
#[tokio::test]
async fn creates_review_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let repo = ReviewRepository::new(db);
    let before = Utc::now() - Duration::seconds(5);

    let review = repo
        .create(CreateReviewParams {
            game_id: game.id,
            user_id: user.id,
            rating: 3.5,
            reviewer_name: user.name.clone(),
            review_title: "Good".to_string(),
            review_body: "Good at two.".to_string(),
        })
        .await?;

    assert!(review.review_date > before);
    assert_eq!(review.reviewer_name, user.name);
    assert_eq!(repo.ids_for_user(user.id).await?, vec![review.id]);
    assert!(repo.ids_for_user(user.id + 1).await?.is_empty());

    Ok(())
}
