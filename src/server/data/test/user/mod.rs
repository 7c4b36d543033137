use crate::{model::operation::Role, server::data::user::UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_roles;
mod super_admin_exists;
