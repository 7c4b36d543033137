use crate::server::data::image::ImageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
