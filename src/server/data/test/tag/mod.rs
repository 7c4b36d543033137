use crate::server::data::tag::TagRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod existing_ids;
mod get_all;
