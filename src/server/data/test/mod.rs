mod game;
mod game_tag;
mod genre;
mod image;
mod review;
mod tag;
mod user;
