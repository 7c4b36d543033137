pub mod application_user;
pub mod game;
pub mod helper;
pub mod login;
pub mod review;

pub use application_user::ApplicationUserServiceClient;
pub use game::GameServiceClient;
pub use helper::ApiClient;
pub use login::LoginServiceClient;
pub use review::ReviewServiceClient;
