//! SeaORM entities for the game catalog schema.

pub mod prelude;

pub mod application_user;
pub mod game;
pub mod game_tag;
pub mod genre;
pub mod image;
pub mod review;
pub mod tag;
pub mod user_role;
