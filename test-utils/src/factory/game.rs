//! Game factory for creating test game entities.
//!
//! Every game is created with its empty image row, matching what the application does.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db, genre.id)
///     .name("Azul")
///     .likes(3)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    genre_id: i32,
    name: String,
    description: Option<String>,
    release_date: Option<DateTime<Utc>>,
    likes: i32,
    min_players: i32,
    max_players: i32,
    average_duration_in_hours: Option<f64>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"`
    /// - likes: `0`
    /// - players: `1` to `4`
    /// - description, release_date, average_duration_in_hours: `None`
    pub fn new(db: &'a DatabaseConnection, genre_id: i32) -> Self {
        Self {
            db,
            genre_id,
            name: format!("Game {}", next_id()),
            description: None,
            release_date: None,
            likes: 0,
            min_players: 1,
            max_players: 4,
            average_duration_in_hours: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    pub fn players(mut self, min_players: i32, max_players: i32) -> Self {
        self.min_players = min_players;
        self.max_players = max_players;
        self
    }

    pub fn average_duration_in_hours(mut self, hours: f64) -> Self {
        self.average_duration_in_hours = Some(hours);
        self
    }

    /// Inserts the game and its empty image row.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let game = entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            likes: ActiveValue::Set(self.likes),
            number_of_ratings: ActiveValue::Set(0),
            average_rating: ActiveValue::Set(0.0),
            average_duration_in_hours: ActiveValue::Set(self.average_duration_in_hours),
            min_players: ActiveValue::Set(self.min_players),
            max_players: ActiveValue::Set(self.max_players),
            genre_id: ActiveValue::Set(self.genre_id),
        }
        .insert(self.db)
        .await?;

        entity::image::ActiveModel {
            game_id: ActiveValue::Set(game.id),
            base64_image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(game)
    }
}

/// Creates a game in a freshly created genre.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    let genre = crate::factory::genre::create_genre(db).await?;
    create_game_in_genre(db, genre.id).await
}

pub async fn create_game_in_genre(
    db: &DatabaseConnection,
    genre_id: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, genre_id).build().await
}
