pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_genre_table;
mod m20260901_000002_create_tag_table;
mod m20260901_000003_create_game_table;
mod m20260901_000004_create_image_table;
mod m20260901_000005_create_game_tag_table;
mod m20260901_000006_create_application_user_table;
mod m20260901_000007_create_user_role_table;
mod m20260901_000008_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_genre_table::Migration),
            Box::new(m20260901_000002_create_tag_table::Migration),
            Box::new(m20260901_000003_create_game_table::Migration),
            Box::new(m20260901_000004_create_image_table::Migration),
            Box::new(m20260901_000005_create_game_tag_table::Migration),
            Box::new(m20260901_000006_create_application_user_table::Migration),
            Box::new(m20260901_000007_create_user_role_table::Migration),
            Box::new(m20260901_000008_create_review_table::Migration),
        ]
    }
}
