use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::tag::Tag;

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tag ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let tag = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(tag.map(Tag::from_entity))
    }

    pub async fn find_model(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    /// Returns which of `ids` exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Id)
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets one page of tags ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of tags per page
    ///
    /// # Returns
    /// - `Ok((tags, total))` - The page and the total number of tags
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Tag>, u64), DbErr> {
        let paginator = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tags = paginator.fetch_page(page).await?;

        Ok((tags.into_iter().map(Tag::from_entity).collect(), total))
    }

    pub async fn insert(&self, tag: entity::tag::ActiveModel) -> Result<Tag, DbErr> {
        let tag = tag.insert(self.db).await?;

        Ok(Tag::from_entity(tag))
    }

    pub async fn update(&self, tag: entity::tag::ActiveModel) -> Result<Tag, DbErr> {
        let tag = tag.update(self.db).await?;

        Ok(Tag::from_entity(tag))
    }

    /// Deletes a tag together with its game links, returning whether the tag existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GameTag::delete_many()
            .filter(entity::game_tag::Column::TagId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Tag::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
