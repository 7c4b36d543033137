use crate::server::{data::game::GameRepository, mapping::IncludeTree};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_likes;
mod create;
mod find_by_id;
mod get_all;
mod get_by_ids;
