use test_utils::{builder::TestBuilder, factory, fixture};
use uuid::Uuid;

use super::*;
use crate::{
    model::{game::GameDto, tracked::Tracked},
    server::{data::game::GameRepository, error::AppError, service::game::GameService},
};

/// Tests listing an empty catalog.
///
/// Expected: failure with "No games currently exist."
#[tokio::test]
async fn get_games_fails_on_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db).get_games(&Caller::anonymous()).await?;

    assert!(!result.was_successful);
    assert_eq!(result.message.as_deref(), Some("No games currently exist."));

    Ok(())
}

/// Tests that listed games carry their genre and tags but not their reviews.
///
/// Expected: genre and gameTags present, reviews absent
#[tokio::test]
async fn get_games_includes_genre_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, tags) = factory::helpers::create_tagged_game(db, 2).await?;

    let result = GameService::new(db).get_games(&Caller::anonymous()).await?;

    let games = result.object.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id.get(), Some(&game.id));
    assert!(games[0].genre.is_some());
    assert!(games[0].reviews.is_none());
    let game_tags = games[0].game_tags.as_ref().unwrap();
    assert_eq!(game_tags.len(), tags.len());
    assert!(game_tags.iter().all(|link| link.tag.is_some()));

    Ok(())
}

/// Tests fetching games by ids when none match.
///
/// Expected: success with an empty list
#[tokio::test]
async fn get_games_from_ids_allows_no_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let result = GameService::new(db)
        .get_games_from_ids(&Caller::anonymous(), &[Uuid::new_v4()])
        .await?;

    assert!(result.was_successful);
    assert_eq!(result.object, Some(Vec::new()));

    Ok(())
}

/// Tests game details for an unknown id.
///
/// Expected: failure with "Could not find the requested game"
#[tokio::test]
async fn get_game_details_fails_for_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db)
        .get_game_details(&Caller::anonymous(), Uuid::new_v4())
        .await?;

    assert!(!result.was_successful);
    assert_eq!(
        result.message.as_deref(),
        Some("Could not find the requested game")
    );

    Ok(())
}

/// Tests that details include non-deleted reviews.
///
/// Expected: one review, the deleted one left out
#[tokio::test]
async fn get_game_details_includes_active_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let kept = factory::create_review(db, game.id, user.id).await?;
    factory::review::ReviewFactory::new(db, game.id, user.id)
        .deleted()
        .build()
        .await?;

    let result = GameService::new(db)
        .get_game_details(&Caller::anonymous(), game.id)
        .await?;

    let dto = result.object.unwrap();
    let reviews = dto.reviews.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id.get(), Some(&kept.id));
    assert!(dto.genre.is_some());

    Ok(())
}

/// Tests reading the image of a game that has none.
///
/// Expected: failure naming the missing image
#[tokio::test]
async fn get_game_image_fails_without_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    let result = service.get_game_image(&Caller::anonymous(), game.id).await?;
    assert_eq!(
        result.message.as_deref(),
        Some("There is no image uploaded for this game.")
    );

    let result = service
        .get_game_image(&Caller::anonymous(), Uuid::new_v4())
        .await?;
    assert_eq!(result.message.as_deref(), Some("Unable to find the game."));

    Ok(())
}

/// Tests uploading a PNG and reading it back.
///
/// Expected: image stored as a PNG data URL
#[tokio::test]
async fn uploads_and_serves_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    let upload = service
        .upload_game_image(&admin(), game.id, &fixture::image::png())
        .await?;
    assert!(upload.was_successful);

    let result = service.get_game_image(&Caller::anonymous(), game.id).await?;
    assert!(result
        .object
        .unwrap()
        .starts_with("data:image/png;base64,"));

    Ok(())
}

/// Tests uploading a file that is not an image.
///
/// Expected: failure with "Unable to upload this image"
#[tokio::test]
async fn rejects_non_image_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let result = GameService::new(db)
        .upload_game_image(&admin(), game.id, b"plain text")
        .await?;

    assert!(!result.was_successful);
    assert_eq!(result.message.as_deref(), Some("Unable to upload this image"));

    Ok(())
}

/// Tests uploading a file with an image header but no decodable image behind it.
///
/// Expected: failure with "Unable to upload this image", nothing stored
#[tokio::test]
async fn rejects_malformed_image_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    let result = service
        .upload_game_image(&admin(), game.id, b"\xff\xd8\xffnot really a jpeg at all")
        .await?;
    assert!(!result.was_successful);
    assert_eq!(result.message.as_deref(), Some("Unable to upload this image"));

    let image = service.get_game_image(&Caller::anonymous(), game.id).await?;
    assert!(!image.was_successful);

    Ok(())
}

/// Tests listing tags when none exist.
///
/// Expected: failure with "There are no tags in the database"
#[tokio::test]
async fn get_all_tags_fails_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db).get_all_tags(&member()).await?;

    assert_eq!(
        result.message.as_deref(),
        Some("There are no tags in the database")
    );

    Ok(())
}

/// Tests replacing a game's tags with a list holding a duplicate.
///
/// Expected: success, two distinct links
#[tokio::test]
async fn set_game_tags_collapses_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, old_tags) = factory::helpers::create_tagged_game(db, 1).await?;
    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;
    let service = GameService::new(db);

    let result = service
        .set_game_tags(&member(), game.id, &[first.id, second.id, first.id])
        .await?;
    assert!(result.was_successful);
    let returned = result.object.unwrap();
    let returned_ids: Vec<i32> = returned.iter().filter_map(|l| l.tag_id.cloned()).collect();
    assert_eq!(returned_ids, vec![first.id, second.id]);
    assert!(returned.iter().all(|l| l.game_id.get() == Some(&game.id)));
    assert!(returned.iter().all(|l| l.tag.is_none()));

    let links = service
        .get_game_tags(&Caller::anonymous(), game.id)
        .await?
        .object
        .unwrap();
    let mut tag_ids: Vec<i32> = links.iter().filter_map(|l| l.tag_id.cloned()).collect();
    tag_ids.sort();
    assert_eq!(tag_ids, vec![first.id, second.id]);
    assert!(!tag_ids.contains(&old_tags[0].id));

    Ok(())
}

/// Tests that an unknown tag leaves the existing links untouched.
///
/// Expected: failure, original link kept
#[tokio::test]
async fn set_game_tags_rejects_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, tags) = factory::helpers::create_tagged_game(db, 1).await?;
    let service = GameService::new(db);

    let result = service
        .set_game_tags(&member(), game.id, &[tags[0].id + 100])
        .await?;
    assert_eq!(
        result.message.as_deref(),
        Some("One or more of the requested tags do not exist.")
    );

    let links = service
        .get_game_tags(&Caller::anonymous(), game.id)
        .await?
        .object
        .unwrap();
    assert_eq!(links.len(), 1);

    Ok(())
}

/// Tests that removing a like from a game with none keeps the count at zero.
///
/// Expected: likes 1 after add, 0 after two removals
#[tokio::test]
async fn likes_never_go_negative() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);
    let repo = GameRepository::new(db);

    assert!(service.add_like(&Caller::anonymous(), game.id).await?.was_successful);
    assert_eq!(repo.find_model(game.id).await?.unwrap().likes, 1);

    service.remove_like(&Caller::anonymous(), game.id).await?;
    service.remove_like(&Caller::anonymous(), game.id).await?;
    assert_eq!(repo.find_model(game.id).await?.unwrap().likes, 0);

    let result = service
        .add_like(&Caller::anonymous(), Uuid::new_v4())
        .await?;
    assert_eq!(
        result.message.as_deref(),
        Some("Unable to find the requested game")
    );

    Ok(())
}

/// Tests creating a game from a DTO without an id.
///
/// Expected: success with a generated id and zeroed statistics
#[tokio::test]
async fn save_creates_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let dto = GameDto {
        name: "Catan".to_string().into(),
        min_players: 3.into(),
        max_players: 4.into(),
        genre_id: genre.id.into(),
        likes: 50.into(),
        ..Default::default()
    };

    let result = GameService::new(db).save(&admin(), &dto).await?;

    let saved = result.object.unwrap();
    let id = *saved.id.get().unwrap();
    let model = GameRepository::new(db).find_model(id).await?.unwrap();
    assert_eq!(model.name, "Catan");
    assert_eq!(model.likes, 0);
    assert_eq!(model.genre_id, genre.id);

    Ok(())
}

/// Tests that a partial update only writes the supplied field.
///
/// Expected: name replaced, description kept
#[tokio::test]
async fn save_applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let game = factory::game::GameFactory::new(db, genre.id)
        .description("Trade and build")
        .build()
        .await?;
    let dto = GameDto {
        id: Tracked::changed(Some(game.id)),
        name: "Catan".to_string().into(),
        ..Default::default()
    };

    let result = GameService::new(db).save(&admin(), &dto).await?;
    assert!(result.was_successful);

    let model = GameRepository::new(db).find_model(game.id).await?.unwrap();
    assert_eq!(model.name, "Catan");
    assert_eq!(model.description.as_deref(), Some("Trade and build"));

    Ok(())
}

/// Tests the save validation failures.
///
/// Expected: unknown game, unknown genre and an inverted player range all fail
#[tokio::test]
async fn save_rejects_invalid_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    let unknown = GameDto {
        id: Tracked::changed(Some(Uuid::new_v4())),
        name: "Ghost".to_string().into(),
        ..Default::default()
    };
    let result = service.save(&admin(), &unknown).await?;
    assert_eq!(
        result.message.as_deref(),
        Some("Could not find the requested game")
    );

    let bad_genre = GameDto {
        id: Tracked::changed(Some(game.id)),
        genre_id: (game.genre_id + 100).into(),
        ..Default::default()
    };
    let result = service.save(&admin(), &bad_genre).await?;
    assert_eq!(result.message.as_deref(), Some("Unable to find the genre."));

    let bad_range = GameDto {
        id: Tracked::changed(Some(game.id)),
        min_players: 5.into(),
        max_players: 2.into(),
        ..Default::default()
    };
    let result = service.save(&admin(), &bad_range).await?;
    assert_eq!(
        result.message.as_deref(),
        Some("The minimum player count must be between 1 and the maximum.")
    );

    Ok(())
}
