//! Game service for catalog browsing, tagging, likes and images.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, IntoActiveModel};
use uuid::Uuid;

use crate::{
    model::{
        api::ItemResult, game::GameDto, game_tag::GameTagDto, image::ImageDto,
        operation::{game, game_service},
        tag::TagDto,
    },
    server::{
        data::{
            game::GameRepository, game_tag::GameTagRepository, genre::GenreRepository,
            image::ImageRepository, tag::TagRepository,
        },
        error::AppError,
        mapping::{
            current_value, map_collection, map_to_dto, map_to_entity, IncludeTree,
            MappingContext,
        },
        middleware::auth::Caller,
        model::game::Game,
        service::upload::image_data_url,
    },
};

const GAME_LIST_INCLUDES: &str = "genre,gameTags.tag";
const GAME_DETAILS_INCLUDES: &str = "genre,gameTags.tag,reviews";
const GAME_TAG_INCLUDES: &str = "tag";

const MSG_NO_GAMES: &str = "No games currently exist.";
const MSG_GAME_NOT_FOUND: &str = "Could not find the requested game";
const MSG_REQUESTED_GAME_NOT_FOUND: &str = "Unable to find the requested game";
const MSG_IMAGE_GAME_NOT_FOUND: &str = "Unable to find the game.";
const MSG_NO_IMAGE: &str = "There is no image uploaded for this game.";
const MSG_UPLOAD_GAME_NOT_FOUND: &str = "Unable to find the game";
const MSG_UPLOAD_FAILED: &str = "Unable to upload this image";
const MSG_NO_TAGS: &str = "There are no tags in the database";
const MSG_UNKNOWN_TAGS: &str = "One or more of the requested tags do not exist.";
const MSG_UNKNOWN_GENRE: &str = "Unable to find the genre.";
const MSG_PLAYER_RANGE: &str = "The minimum player count must be between 1 and the maximum.";

/// Service providing the game catalog operations.
pub struct GameService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every game with its genre and tags.
    ///
    /// # Returns
    /// - `Ok(success(games))` - At least one game exists
    /// - `Ok(failure)` - The catalog is empty
    pub async fn get_games(&self, caller: &Caller) -> Result<ItemResult<Vec<GameDto>>, AppError> {
        game_service::GET_GAMES.authorize(caller)?;

        let tree = IncludeTree::parse(GAME_LIST_INCLUDES);
        let games = GameRepository::new(self.db).get_all(&tree).await?;
        if games.is_empty() {
            return Ok(ItemResult::failure(MSG_NO_GAMES));
        }

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(&games, &ctx, &tree)))
    }

    /// Lists the requested games with their genre and tags.
    ///
    /// Unlike `get_games`, no matches is a successful empty list.
    pub async fn get_games_from_ids(
        &self,
        caller: &Caller,
        game_ids: &[Uuid],
    ) -> Result<ItemResult<Vec<GameDto>>, AppError> {
        game_service::GET_GAMES_FROM_IDS.authorize(caller)?;

        let tree = IncludeTree::parse(GAME_LIST_INCLUDES);
        let games = GameRepository::new(self.db)
            .get_by_ids(game_ids, &tree)
            .await?;

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(&games, &ctx, &tree)))
    }

    /// Gets one game with its genre, tags and non-deleted reviews.
    pub async fn get_game_details(
        &self,
        caller: &Caller,
        game_id: Uuid,
    ) -> Result<ItemResult<GameDto>, AppError> {
        game_service::GET_GAME_DETAILS.authorize(caller)?;

        let tree = IncludeTree::parse(GAME_DETAILS_INCLUDES);
        let game = GameRepository::new(self.db)
            .find_by_id(game_id, &tree)
            .await?;

        let ctx = MappingContext::new(caller.clone());
        match map_to_dto::<Game, GameDto>(game.as_ref(), &ctx, &tree) {
            Some(dto) => Ok(ItemResult::success(dto)),
            None => Ok(ItemResult::failure(MSG_GAME_NOT_FOUND)),
        }
    }

    /// Gets the game's image as a data URL.
    pub async fn get_game_image(
        &self,
        caller: &Caller,
        game_id: Uuid,
    ) -> Result<ItemResult<String>, AppError> {
        game_service::GET_GAME_IMAGE.authorize(caller)?;

        if !GameRepository::new(self.db).exists(game_id).await? {
            return Ok(ItemResult::failure(MSG_IMAGE_GAME_NOT_FOUND));
        }

        let image = ImageRepository::new(self.db).find_by_game(game_id).await?;
        match image
            .and_then(|image| image.base64_image)
            .filter(|data| !data.is_empty())
        {
            Some(data) => Ok(ItemResult::success(data)),
            None => Ok(ItemResult::failure(MSG_NO_IMAGE)),
        }
    }

    /// Stores an uploaded picture as the game's image.
    ///
    /// # Arguments
    /// - `game_id` - Game the image belongs to
    /// - `bytes` - Raw file content, must be a PNG, JPEG, GIF or WebP image
    ///
    /// # Returns
    /// - `Ok(success(image))` - Image stored, replacing any previous one
    /// - `Ok(failure)` - Unknown game, or a file that does not decode as an accepted image
    pub async fn upload_game_image(
        &self,
        caller: &Caller,
        game_id: Uuid,
        bytes: &[u8],
    ) -> Result<ItemResult<ImageDto>, AppError> {
        game_service::UPLOAD_GAME_IMAGE.authorize(caller)?;

        if !GameRepository::new(self.db).exists(game_id).await? {
            return Ok(ItemResult::failure(MSG_UPLOAD_GAME_NOT_FOUND));
        }

        let Some(data_url) = image_data_url(bytes) else {
            return Ok(ItemResult::failure(MSG_UPLOAD_FAILED));
        };

        let image = ImageRepository::new(self.db)
            .upsert(game_id, data_url)
            .await?;

        tracing::info!("Uploaded image of {} bytes for game {}", bytes.len(), game_id);

        let ctx = MappingContext::new(caller.clone());
        let dto = map_to_dto(Some(&image), &ctx, &IncludeTree::empty());
        Ok(dto.map_or_else(|| ItemResult::failure(MSG_UPLOAD_FAILED), ItemResult::success))
    }

    /// Lists every tag. An empty tag table is a failure.
    pub async fn get_all_tags(&self, caller: &Caller) -> Result<ItemResult<Vec<TagDto>>, AppError> {
        game_service::GET_ALL_TAGS.authorize(caller)?;

        let tags = TagRepository::new(self.db).get_all().await?;
        if tags.is_empty() {
            return Ok(ItemResult::failure(MSG_NO_TAGS));
        }

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(
            &tags,
            &ctx,
            &IncludeTree::empty(),
        )))
    }

    /// Lists a game's tag links with their tags. An unknown game has no links.
    pub async fn get_game_tags(
        &self,
        caller: &Caller,
        game_id: Uuid,
    ) -> Result<ItemResult<Vec<GameTagDto>>, AppError> {
        game_service::GET_GAME_TAGS.authorize(caller)?;

        let tree = IncludeTree::parse(GAME_TAG_INCLUDES);
        let game_tags = GameTagRepository::new(self.db)
            .get_by_game(game_id, &tree)
            .await?;

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(&game_tags, &ctx, &tree)))
    }

    /// Replaces the tags of a game.
    ///
    /// Duplicate ids are collapsed keeping their first position. Every id must name an
    /// existing tag or nothing is changed. On success the new links are returned in that
    /// order, without their tags.
    pub async fn set_game_tags(
        &self,
        caller: &Caller,
        game_id: Uuid,
        tag_ids: &[i32],
    ) -> Result<ItemResult<Vec<GameTagDto>>, AppError> {
        game_service::SET_GAME_TAGS.authorize(caller)?;

        if !GameRepository::new(self.db).exists(game_id).await? {
            return Ok(ItemResult::failure(MSG_REQUESTED_GAME_NOT_FOUND));
        }

        let mut distinct: Vec<i32> = Vec::with_capacity(tag_ids.len());
        for tag_id in tag_ids {
            if !distinct.contains(tag_id) {
                distinct.push(*tag_id);
            }
        }

        let existing = TagRepository::new(self.db).existing_ids(&distinct).await?;
        if existing.len() != distinct.len() {
            return Ok(ItemResult::failure(MSG_UNKNOWN_TAGS));
        }

        let links = GameTagRepository::new(self.db)
            .replace_for_game(game_id, &distinct)
            .await?;

        tracing::info!("Set {} tags on game {}", links.len(), game_id);

        let ctx = MappingContext::new(caller.clone());
        Ok(ItemResult::success(map_collection(
            &links,
            &ctx,
            &IncludeTree::empty(),
        )))
    }

    pub async fn add_like(&self, caller: &Caller, game_id: Uuid) -> Result<ItemResult, AppError> {
        game_service::ADD_LIKE.authorize(caller)?;

        self.adjust_likes(game_id, 1).await
    }

    /// Removes one like. The count never drops below zero.
    pub async fn remove_like(
        &self,
        caller: &Caller,
        game_id: Uuid,
    ) -> Result<ItemResult, AppError> {
        game_service::REMOVE_LIKE.authorize(caller)?;

        self.adjust_likes(game_id, -1).await
    }

    async fn adjust_likes(&self, game_id: Uuid, delta: i32) -> Result<ItemResult, AppError> {
        match GameRepository::new(self.db).add_likes(game_id, delta).await? {
            Some(likes) => {
                tracing::debug!("Game {} now has {} likes", game_id, likes);
                Ok(ItemResult::ok())
            }
            None => Ok(ItemResult::failure(MSG_REQUESTED_GAME_NOT_FOUND)),
        }
    }

    /// Creates a game when the DTO carries no id, otherwise applies its changed fields.
    ///
    /// # Returns
    /// - `Ok(success(game))` - The saved game without relationships
    /// - `Ok(failure)` - Unknown game or genre, a missing required field, or an invalid
    ///   player range
    pub async fn save(&self, caller: &Caller, dto: &GameDto) -> Result<ItemResult<GameDto>, AppError> {
        game::SAVE.authorize(caller)?;

        let ctx = MappingContext::new(caller.clone());
        let repo = GameRepository::new(self.db);

        let (mut active, existing) = match dto.id.get() {
            Some(id) => {
                let Some(model) = repo.find_model(*id).await? else {
                    return Ok(ItemResult::failure(MSG_GAME_NOT_FOUND));
                };
                (model.clone().into_active_model(), Some(model))
            }
            None => (
                entity::game::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    likes: ActiveValue::Set(0),
                    number_of_ratings: ActiveValue::Set(0),
                    average_rating: ActiveValue::Set(0.0),
                    description: ActiveValue::Set(None),
                    release_date: ActiveValue::Set(None),
                    average_duration_in_hours: ActiveValue::Set(None),
                    ..Default::default()
                },
                None,
            ),
        };

        if let Err(e) = map_to_entity(dto, Some(&mut active), &ctx) {
            return Ok(ItemResult::failure(e.to_string()));
        }

        if let Some(message) = self.validate(&active).await? {
            return Ok(ItemResult::failure(message));
        }

        let saved = match existing {
            Some(model) if !active.is_changed() => {
                Game::from_entity(model)
            }
            Some(_) => repo.update(active).await?,
            None => {
                let game = repo.create(active).await?;
                tracing::info!("Created game {} ({})", game.name, game.id);
                game
            }
        };

        let dto = map_to_dto(Some(&saved), &ctx, &IncludeTree::empty());
        Ok(dto.map_or_else(|| ItemResult::failure(MSG_GAME_NOT_FOUND), ItemResult::success))
    }

    async fn validate(&self, active: &entity::game::ActiveModel) -> Result<Option<String>, AppError> {
        let (Some(_), Some(min), Some(max), Some(genre_id)) = (
            current_value(&active.name),
            current_value(&active.min_players),
            current_value(&active.max_players),
            current_value(&active.genre_id),
        ) else {
            return Ok(Some(
                "The fields 'name', 'minPlayers', 'maxPlayers' and 'genreId' are required."
                    .to_string(),
            ));
        };

        if *min < 1 || min > max {
            return Ok(Some(MSG_PLAYER_RANGE.to_string()));
        }

        if GenreRepository::new(self.db).find_by_id(*genre_id).await?.is_none() {
            return Ok(Some(MSG_UNKNOWN_GENRE.to_string()));
        }

        Ok(None)
    }
}
