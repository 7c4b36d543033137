use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000002_create_tag_table::Tag, m20260901_000003_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTag::Table)
                    .if_not_exists()
                    .col(pk_auto(GameTag::Id))
                    .col(uuid(GameTag::GameId))
                    .col(integer(GameTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tag_game_id")
                            .from(GameTag::Table, GameTag::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tag_tag_id")
                            .from(GameTag::Table, GameTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_game_tag_unique")
                            .col(GameTag::GameId)
                            .col(GameTag::TagId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTag {
    Table,
    Id,
    GameId,
    TagId,
}
