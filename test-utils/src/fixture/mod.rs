//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build entity models in memory for unit tests, mapper tests and mocked
//! database results. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let game = fixture::game::entity();
//! let genre = fixture::genre::entity_with(7, "Strategy");
//! ```

pub mod game;
pub mod genre;
pub mod image;
pub mod review;
pub mod tag;
