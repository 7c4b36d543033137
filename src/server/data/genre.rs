use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::genre::Genre;

pub struct GenreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let genre = entity::prelude::Genre::find_by_id(id).one(self.db).await?;

        Ok(genre.map(Genre::from_entity))
    }

    /// Raw entity for building an update.
    pub async fn find_model(&self, id: i32) -> Result<Option<entity::genre::Model>, DbErr> {
        entity::prelude::Genre::find_by_id(id).one(self.db).await
    }

    /// Gets one page of genres ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of genres per page
    ///
    /// # Returns
    /// - `Ok((genres, total))` - The page and the total number of genres
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Genre>, u64), DbErr> {
        let paginator = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let genres = paginator.fetch_page(page).await?;

        Ok((genres.into_iter().map(Genre::from_entity).collect(), total))
    }

    pub async fn insert(&self, genre: entity::genre::ActiveModel) -> Result<Genre, DbErr> {
        let genre = genre.insert(self.db).await?;

        Ok(Genre::from_entity(genre))
    }

    pub async fn update(&self, genre: entity::genre::ActiveModel) -> Result<Genre, DbErr> {
        let genre = genre.update(self.db).await?;

        Ok(Genre::from_entity(genre))
    }

    /// Checks whether any game still belongs to the genre.
    pub async fn in_use(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::GenreId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a genre, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Genre::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
