//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert into the
//! database; use `fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let genre = factory::create_genre(&db).await?;
//! let game = factory::game::GameFactory::new(&db, genre.id)
//!     .name("Catan")
//!     .players(3, 4)
//!     .build()
//!     .await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .password("Passw0rd!")
//!     .super_admin()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `genre` - Create genre entities
//! - `tag` - Create tag entities
//! - `game` - Create game entities together with their empty image row
//! - `game_tag` - Link games to tags
//! - `user` - Create application users with roles
//! - `review` - Create reviews
//! - `helpers` - Counters and entities created with their dependencies

pub mod game;
pub mod game_tag;
pub mod genre;
pub mod helpers;
pub mod review;
pub mod tag;
pub mod user;

pub use game::{create_game, create_game_in_genre};
pub use game_tag::create_game_tag;
pub use genre::create_genre;
pub use review::create_review;
pub use tag::create_tag;
pub use user::create_user;
