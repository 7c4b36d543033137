//! Game data repository.
//!
//! Relationship loading is driven by the caller's `IncludeTree`: a relationship is queried
//! only when the tree names it, so a mapper never sees data it was not asked to project.
//! Each relationship is fetched with one batched `IN` query for all games of the result.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::game_tag::GameTagRepository,
    mapping::IncludeTree,
    model::{game::Game, genre::Genre, image::Image, review::Review},
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game ordered by name.
    ///
    /// # Arguments
    /// - `tree` - Relationships to load alongside each game
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - All games, empty when none exist
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_all(&self, tree: &IncludeTree) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(games, tree).await
    }

    /// Gets the games whose ids are listed, ordered by name. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[Uuid], tree: &IncludeTree) -> Result<Vec<Game>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(games, tree).await
    }

    pub async fn find_by_id(&self, id: Uuid, tree: &IncludeTree) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![game], tree).await?.pop())
    }

    /// Raw entity for building an update.
    pub async fn find_model(&self, id: Uuid) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a game together with its empty image row.
    ///
    /// Both rows are written in one transaction so a game never exists without the image
    /// row it owns.
    pub async fn create(&self, game: entity::game::ActiveModel) -> Result<Game, DbErr> {
        let txn = self.db.begin().await?;

        let game = game.insert(&txn).await?;
        entity::image::ActiveModel {
            game_id: ActiveValue::Set(game.id),
            base64_image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Game::from_entity(game))
    }

    pub async fn update(&self, game: entity::game::ActiveModel) -> Result<Game, DbErr> {
        let game = game.update(self.db).await?;

        Ok(Game::from_entity(game))
    }

    /// Adds `delta` to the like count, never going below zero.
    ///
    /// # Returns
    /// - `Ok(Some(likes))` - The new like count
    /// - `Ok(None)` - No game with this id
    pub async fn add_likes(&self, id: Uuid, delta: i32) -> Result<Option<i32>, DbErr> {
        let Some(game) = self.find_model(id).await? else {
            return Ok(None);
        };

        let likes = game.likes.saturating_add(delta).max(0);
        let mut active = game.into_active_model();
        active.likes.set_if_not_equals(likes);
        if active.is_changed() {
            active.update(self.db).await?;
        }

        Ok(Some(likes))
    }

    /// Stores recalculated rating statistics on a game.
    pub async fn set_rating_stats(
        &self,
        id: Uuid,
        number_of_ratings: i32,
        average_rating: f64,
    ) -> Result<(), DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Unchanged(id),
            number_of_ratings: ActiveValue::Set(number_of_ratings),
            average_rating: ActiveValue::Set(average_rating),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    async fn load_relations(
        &self,
        games: Vec<entity::game::Model>,
        tree: &IncludeTree,
    ) -> Result<Vec<Game>, DbErr> {
        let mut games: Vec<Game> = games.into_iter().map(Game::from_entity).collect();
        if games.is_empty() || tree.is_empty() {
            return Ok(games);
        }

        let game_ids: Vec<Uuid> = games.iter().map(|game| game.id).collect();

        if tree.child("genre").is_some() {
            let mut genre_ids: Vec<i32> = games.iter().map(|game| game.genre_id).collect();
            genre_ids.sort_unstable();
            genre_ids.dedup();

            let genres: HashMap<i32, Genre> = entity::prelude::Genre::find()
                .filter(entity::genre::Column::Id.is_in(genre_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|genre| (genre.id, Genre::from_entity(genre)))
                .collect();

            for game in &mut games {
                game.genre = genres.get(&game.genre_id).cloned();
            }
        }

        if tree.child("image").is_some() {
            let mut images: HashMap<Uuid, Image> = entity::prelude::Image::find()
                .filter(entity::image::Column::GameId.is_in(game_ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|image| (image.game_id, Image::from_entity(image)))
                .collect();

            for game in &mut games {
                game.image = images.remove(&game.id);
            }
        }

        if let Some(subtree) = tree.child("gameTags") {
            let mut game_tags = GameTagRepository::new(self.db)
                .get_by_games(&game_ids, subtree)
                .await?;

            for game in &mut games {
                game.game_tags = Some(game_tags.remove(&game.id).unwrap_or_default());
            }
        }

        if tree.child("reviews").is_some() {
            let mut reviews: HashMap<Uuid, Vec<Review>> = HashMap::new();
            let rows = entity::prelude::Review::find()
                .filter(entity::review::Column::GameId.is_in(game_ids))
                .filter(entity::review::Column::IsDeleted.eq(false))
                .order_by_desc(entity::review::Column::ReviewDate)
                .all(self.db)
                .await?;
            for row in rows {
                reviews
                    .entry(row.game_id)
                    .or_default()
                    .push(Review::from_entity(row));
            }

            for game in &mut games {
                game.reviews = Some(reviews.remove(&game.id).unwrap_or_default());
            }
        }

        Ok(games)
    }
}
