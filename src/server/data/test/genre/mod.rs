use crate::server::data::genre::GenreRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
