use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::{
        api::ItemResult,
        game::GameDto,
        game_tag::GameTagDto,
        image::ImageDto,
        operation::{game, game_service},
        params::{GameIdParams, GameIdsParams, SetGameTagsParams},
        tag::TagDto,
    },
};

pub struct GameServiceClient<'a> {
    api: &'a ApiClient,
}

impl<'a> GameServiceClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_games(&self) -> Result<ItemResult<Vec<GameDto>>, ApiError> {
        self.api.invoke_empty(&game_service::GET_GAMES).await
    }

    pub async fn get_games_from_ids(
        &self,
        game_ids: &[Uuid],
    ) -> Result<ItemResult<Vec<GameDto>>, ApiError> {
        let params = GameIdsParams {
            game_ids: game_ids.to_vec(),
        };
        self.api
            .invoke(&game_service::GET_GAMES_FROM_IDS, &params)
            .await
    }

    pub async fn get_game_details(&self, game_id: Uuid) -> Result<ItemResult<GameDto>, ApiError> {
        self.api
            .invoke(&game_service::GET_GAME_DETAILS, &GameIdParams { game_id })
            .await
    }

    /// The image as a `data:` URL.
    pub async fn get_game_image(&self, game_id: Uuid) -> Result<ItemResult<String>, ApiError> {
        self.api
            .invoke(&game_service::GET_GAME_IMAGE, &GameIdParams { game_id })
            .await
    }

    pub async fn upload_game_image(
        &self,
        game_id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ItemResult<ImageDto>, ApiError> {
        let form = Form::new()
            .text("gameId", game_id.to_string())
            .part("image", Part::bytes(bytes).file_name(file_name.to_string()));

        self.api
            .upload(&game_service::UPLOAD_GAME_IMAGE, form)
            .await
    }

    pub async fn get_all_tags(&self) -> Result<ItemResult<Vec<TagDto>>, ApiError> {
        self.api.invoke_empty(&game_service::GET_ALL_TAGS).await
    }

    pub async fn get_game_tags(&self, game_id: Uuid) -> Result<ItemResult<Vec<GameTagDto>>, ApiError> {
        self.api
            .invoke(&game_service::GET_GAME_TAGS, &GameIdParams { game_id })
            .await
    }

    pub async fn set_game_tags(
        &self,
        game_id: Uuid,
        tag_ids: &[i32],
    ) -> Result<ItemResult<Vec<GameTagDto>>, ApiError> {
        let params = SetGameTagsParams {
            game_id,
            tag_ids: tag_ids.to_vec(),
        };
        self.api.invoke(&game_service::SET_GAME_TAGS, &params).await
    }

    pub async fn add_like(&self, game_id: Uuid) -> Result<ItemResult, ApiError> {
        self.api
            .invoke(&game_service::ADD_LIKE, &GameIdParams { game_id })
            .await
    }

    pub async fn remove_like(&self, game_id: Uuid) -> Result<ItemResult, ApiError> {
        self.api
            .invoke(&game_service::REMOVE_LIKE, &GameIdParams { game_id })
            .await
    }

    /// Creates the game when `dto` has no id, otherwise sends only its changed fields.
    pub async fn save_game(&self, dto: &GameDto) -> Result<ItemResult<GameDto>, ApiError> {
        self.api.invoke(&game::SAVE, dto).await
    }
}
