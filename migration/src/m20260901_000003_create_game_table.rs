use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_genre_table::Genre;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(uuid(Game::Id).primary_key())
                    .col(string(Game::Name))
                    .col(text_null(Game::Description))
                    .col(timestamp_with_time_zone_null(Game::ReleaseDate))
                    .col(integer(Game::Likes).default(0))
                    .col(integer(Game::NumberOfRatings).default(0))
                    .col(double(Game::AverageRating).default(0.0))
                    .col(double_null(Game::AverageDurationInHours))
                    .col(integer(Game::MinPlayers).default(1))
                    .col(integer(Game::MaxPlayers).default(1))
                    .col(integer(Game::GenreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genre_id")
                            .from(Game::Table, Game::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Name,
    Description,
    ReleaseDate,
    Likes,
    NumberOfRatings,
    AverageRating,
    AverageDurationInHours,
    MinPlayers,
    MaxPlayers,
    GenreId,
}
