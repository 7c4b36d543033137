use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    mapping::IncludeTree,
    model::{game_tag::GameTag, tag::Tag},
};

pub struct GameTagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the tag links of one game in insertion order.
    ///
    /// The linked tag is loaded when `tree` includes `tag`.
    pub async fn get_by_game(&self, game_id: Uuid, tree: &IncludeTree) -> Result<Vec<GameTag>, DbErr> {
        let mut grouped = self.get_by_games(&[game_id], tree).await?;

        Ok(grouped.remove(&game_id).unwrap_or_default())
    }

    /// Gets the tag links of several games, grouped by game id.
    ///
    /// Games without links have no entry in the map.
    pub async fn get_by_games(
        &self,
        game_ids: &[Uuid],
        tree: &IncludeTree,
    ) -> Result<HashMap<Uuid, Vec<GameTag>>, DbErr> {
        if game_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::GameTag::find()
            .filter(entity::game_tag::Column::GameId.is_in(game_ids.to_vec()))
            .order_by_asc(entity::game_tag::Column::Id)
            .all(self.db)
            .await?;

        let tags: HashMap<i32, Tag> = if tree.child("tag").is_some() && !links.is_empty() {
            let tag_ids: Vec<i32> = links.iter().map(|link| link.tag_id).collect();
            entity::prelude::Tag::find()
                .filter(entity::tag::Column::Id.is_in(tag_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|tag| (tag.id, Tag::from_entity(tag)))
                .collect()
        } else {
            HashMap::new()
        };

        let mut grouped: HashMap<Uuid, Vec<GameTag>> = HashMap::new();
        for link in links {
            let mut game_tag = GameTag::from_entity(link);
            game_tag.tag = tags.get(&game_tag.tag_id).cloned();
            grouped.entry(game_tag.game_id).or_default().push(game_tag);
        }

        Ok(grouped)
    }

    /// Replaces every tag link of a game in a single transaction.
    ///
    /// # Arguments
    /// - `game_id` - Game whose links are replaced
    /// - `tag_ids` - New tag ids, expected to be distinct
    ///
    /// # Returns
    /// - `Ok(Vec<GameTag>)` - The new links without loaded tags
    /// - `Err(DbErr)` - Database error, the previous links are kept
    pub async fn replace_for_game(&self, game_id: Uuid, tag_ids: &[i32]) -> Result<Vec<GameTag>, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GameTag::delete_many()
            .filter(entity::game_tag::Column::GameId.eq(game_id))
            .exec(&txn)
            .await?;

        let mut links = Vec::with_capacity(tag_ids.len());
        for tag_id in tag_ids {
            let link = entity::game_tag::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                tag_id: ActiveValue::Set(*tag_id),
                ..Default::default()
            };
            let model = entity::prelude::GameTag::insert(link)
                .exec_with_returning(&txn)
                .await?;
            links.push(GameTag::from_entity(model));
        }

        txn.commit().await?;

        Ok(links)
    }
}
