use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationUser::Id))
                    .col(string(ApplicationUser::Name))
                    .col(string_uniq(ApplicationUser::Email))
                    .col(string(ApplicationUser::PasswordHash))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
}
