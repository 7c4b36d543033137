//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. All queries, inserts, updates and deletes go through these structs.

pub mod game;
pub mod game_tag;
pub mod genre;
pub mod image;
pub mod review;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
