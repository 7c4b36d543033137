use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000003_create_game_table::Game,
    m20260901_000006_create_application_user_table::ApplicationUser,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::Id).primary_key())
                    .col(uuid(Review::GameId))
                    .col(integer(Review::UserId))
                    .col(double(Review::Rating))
                    .col(timestamp_with_time_zone(Review::ReviewDate))
                    .col(string(Review::ReviewerName))
                    .col(string(Review::ReviewTitle))
                    .col(text(Review::ReviewBody))
                    .col(boolean(Review::IsDeleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_game_id")
                            .from(Review::Table, Review::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(ApplicationUser::Table, ApplicationUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_review_game_date")
                            .col(Review::GameId)
                            .col(Review::ReviewDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    GameId,
    UserId,
    Rating,
    ReviewDate,
    ReviewerName,
    ReviewTitle,
    ReviewBody,
    IsDeleted,
}
