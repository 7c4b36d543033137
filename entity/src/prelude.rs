pub use super::application_user::Entity as ApplicationUser;
pub use super::game::Entity as Game;
pub use super::game_tag::Entity as GameTag;
pub use super::genre::Entity as Genre;
pub use super::image::Entity as Image;
pub use super::review::Entity as Review;
pub use super::tag::Entity as Tag;
pub use super::user_role::Entity as UserRole;
