use crate::server::{data::game_tag::GameTagRepository, mapping::IncludeTree};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_game;
mod replace_for_game;
mod unique;
