//! Remote operation table shared by the router and the client stub.
//!
//! Every operation is reachable as `POST /api/<Service>/<Name>`. The server registers one
//! route per constant below and authorizes the caller against its `access` before anything
//! else runs; the client stub invokes operations through the same constants so both sides
//! agree on paths by construction.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::SuperAdmin => "SuperAdmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role '{}'", s))
    }
}

/// Who may invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    AllowAll,
    Authenticated,
    /// Caller must hold at least one of the listed roles.
    Roles(&'static [Role]),
}

/// Result of checking a caller's roles against an `Access` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    NotAuthenticated,
    Forbidden,
}

impl Access {
    /// `roles` is `None` for an anonymous caller.
    pub fn check(&self, roles: Option<&[Role]>) -> AccessDecision {
        match (self, roles) {
            (Access::AllowAll, _) => AccessDecision::Granted,
            (_, None) => AccessDecision::NotAuthenticated,
            (Access::Authenticated, Some(_)) => AccessDecision::Granted,
            (Access::Roles(required), Some(held)) => {
                if required.iter().any(|role| held.contains(role)) {
                    AccessDecision::Granted
                } else {
                    AccessDecision::Forbidden
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub service: &'static str,
    pub name: &'static str,
    pub access: Access,
}

impl Operation {
    pub const fn new(service: &'static str, name: &'static str, access: Access) -> Self {
        Self {
            service,
            name,
            access,
        }
    }

    pub fn path(&self) -> String {
        format!("/api/{}/{}", self.service, self.name)
    }
}

const USER: Access = Access::Roles(&[Role::User]);
const SUPER_ADMIN: Access = Access::Roles(&[Role::SuperAdmin]);

pub mod game_service {
    use super::{Access, Operation, SUPER_ADMIN, USER};

    const SERVICE: &str = "GameService";

    pub const GET_GAMES: Operation = Operation::new(SERVICE, "GetGames", Access::AllowAll);
    pub const GET_GAMES_FROM_IDS: Operation =
        Operation::new(SERVICE, "GetGamesFromIds", Access::AllowAll);
    pub const GET_GAME_DETAILS: Operation =
        Operation::new(SERVICE, "GetGameDetails", Access::AllowAll);
    pub const GET_GAME_IMAGE: Operation = Operation::new(SERVICE, "GetGameImage", Access::AllowAll);
    pub const UPLOAD_GAME_IMAGE: Operation = Operation::new(SERVICE, "UploadGameImage", SUPER_ADMIN);
    pub const GET_ALL_TAGS: Operation = Operation::new(SERVICE, "GetAllTags", USER);
    pub const GET_GAME_TAGS: Operation = Operation::new(SERVICE, "GetGameTags", Access::AllowAll);
    pub const SET_GAME_TAGS: Operation = Operation::new(SERVICE, "SetGameTags", USER);
    pub const ADD_LIKE: Operation = Operation::new(SERVICE, "AddLike", Access::AllowAll);
    pub const REMOVE_LIKE: Operation = Operation::new(SERVICE, "RemoveLike", Access::AllowAll);
}

pub mod review_service {
    use super::{Access, Operation, USER};

    const SERVICE: &str = "ReviewService";

    pub const GET_REVIEWS: Operation = Operation::new(SERVICE, "GetReviews", Access::AllowAll);
    pub const ADD_REVIEW: Operation = Operation::new(SERVICE, "AddReview", USER);
    pub const DELETE_REVIEW: Operation = Operation::new(SERVICE, "DeleteReview", USER);
}

pub mod login_service {
    use super::{Access, Operation};

    const SERVICE: &str = "LoginService";

    pub const LOGIN: Operation = Operation::new(SERVICE, "Login", Access::AllowAll);
    pub const GET_TOKEN: Operation = Operation::new(SERVICE, "GetToken", Access::AllowAll);
    pub const LOGOUT: Operation = Operation::new(SERVICE, "Logout", Access::AllowAll);
    pub const CREATE_ACCOUNT: Operation = Operation::new(SERVICE, "CreateAccount", Access::AllowAll);
    pub const CHANGE_PASSWORD: Operation =
        Operation::new(SERVICE, "ChangePassword", Access::Authenticated);
    pub const IS_LOGGED_IN: Operation = Operation::new(SERVICE, "IsLoggedIn", Access::AllowAll);
    pub const GET_USER_INFO: Operation = Operation::new(SERVICE, "GetUserInfo", Access::AllowAll);
}

pub mod application_user_service {
    use super::{Access, Operation};

    const SERVICE: &str = "ApplicationUserService";

    pub const GET_ROLES: Operation = Operation::new(SERVICE, "GetRoles", Access::AllowAll);
    pub const HAS_ROLE: Operation = Operation::new(SERVICE, "HasRole", Access::AllowAll);
    pub const GET_USER_REVIEWS: Operation =
        Operation::new(SERVICE, "GetUserReviews", Access::AllowAll);
}

pub mod genre {
    use super::{Access, Operation, SUPER_ADMIN};

    const SERVICE: &str = "Genre";

    pub const GET: Operation = Operation::new(SERVICE, "get", Access::AllowAll);
    pub const LIST: Operation = Operation::new(SERVICE, "list", Access::AllowAll);
    pub const SAVE: Operation = Operation::new(SERVICE, "save", SUPER_ADMIN);
    pub const DELETE: Operation = Operation::new(SERVICE, "delete", SUPER_ADMIN);
}

pub mod tag {
    use super::{Access, Operation, SUPER_ADMIN};

    const SERVICE: &str = "Tag";

    pub const GET: Operation = Operation::new(SERVICE, "get", Access::AllowAll);
    pub const LIST: Operation = Operation::new(SERVICE, "list", Access::AllowAll);
    pub const SAVE: Operation = Operation::new(SERVICE, "save", SUPER_ADMIN);
    pub const DELETE: Operation = Operation::new(SERVICE, "delete", SUPER_ADMIN);
}

pub mod game {
    use super::{Operation, SUPER_ADMIN};

    pub const SAVE: Operation = Operation::new("Game", "save", SUPER_ADMIN);
}

/// Every operation the server registers, in routing order.
pub const ALL: &[Operation] = &[
    game_service::GET_GAMES,
    game_service::GET_GAMES_FROM_IDS,
    game_service::GET_GAME_DETAILS,
    game_service::GET_GAME_IMAGE,
    game_service::UPLOAD_GAME_IMAGE,
    game_service::GET_ALL_TAGS,
    game_service::GET_GAME_TAGS,
    game_service::SET_GAME_TAGS,
    game_service::ADD_LIKE,
    game_service::REMOVE_LIKE,
    review_service::GET_REVIEWS,
    review_service::ADD_REVIEW,
    review_service::DELETE_REVIEW,
    login_service::LOGIN,
    login_service::GET_TOKEN,
    login_service::LOGOUT,
    login_service::CREATE_ACCOUNT,
    login_service::CHANGE_PASSWORD,
    login_service::IS_LOGGED_IN,
    login_service::GET_USER_INFO,
    application_user_service::GET_ROLES,
    application_user_service::HAS_ROLE,
    application_user_service::GET_USER_REVIEWS,
    genre::GET,
    genre::LIST,
    genre::SAVE,
    genre::DELETE,
    tag::GET,
    tag::LIST,
    tag::SAVE,
    tag::DELETE,
    game::SAVE,
];
