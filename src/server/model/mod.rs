//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and mapped
//! to transfer objects by the `MapFrom` implementations next to them. Relationship slots
//! are `None` until a repository loads them, which is how the mapper tells "not loaded"
//! apart from "loaded and empty".

pub mod game;
pub mod game_tag;
pub mod genre;
pub mod image;
pub mod review;
pub mod tag;
pub mod user;
