//! Transfer objects and the operation table shared by the server and the client stub.

pub mod api;
pub mod game;
pub mod game_tag;
pub mod genre;
pub mod image;
pub mod operation;
pub mod params;
pub mod review;
pub mod tag;
pub mod tracked;
pub mod user;
