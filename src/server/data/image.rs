use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::image::Image;

pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the image row owned by a game.
    pub async fn find_by_game(&self, game_id: Uuid) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find()
            .filter(entity::image::Column::GameId.eq(game_id))
            .one(self.db)
            .await?;

        Ok(image.map(Image::from_entity))
    }

    /// Stores `data_url` as the game's image, creating the row if the game has none.
    ///
    /// # Arguments
    /// - `game_id` - Owning game
    /// - `data_url` - `data:<mime>;base64,<payload>` URL
    ///
    /// # Returns
    /// - `Ok(Image)` - The stored image row
    /// - `Err(DbErr)` - Database error, including a missing game
    pub async fn upsert(&self, game_id: Uuid, data_url: String) -> Result<Image, DbErr> {
        let image = entity::prelude::Image::insert(entity::image::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            base64_image: ActiveValue::Set(Some(data_url)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::image::Column::GameId)
                .update_column(entity::image::Column::Base64Image)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Image::from_entity(image))
    }
}
