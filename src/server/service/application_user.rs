use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{api::ItemResult, operation::application_user_service},
    server::{data::review::ReviewRepository, error::AppError, middleware::auth::Caller},
};

/// Caller-centric queries used by the client's session object.
pub struct ApplicationUserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ApplicationUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Roles of the caller, empty for anonymous callers.
    pub fn get_roles(&self, caller: &Caller) -> Result<ItemResult<Vec<String>>, AppError> {
        application_user_service::GET_ROLES.authorize(caller)?;

        let roles = caller
            .roles()
            .unwrap_or_default()
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();

        Ok(ItemResult::success(roles))
    }

    pub fn has_role(&self, caller: &Caller, role: &str) -> Result<ItemResult, AppError> {
        application_user_service::HAS_ROLE.authorize(caller)?;

        let held = caller
            .roles()
            .unwrap_or_default()
            .iter()
            .any(|held| held.as_str() == role);

        if held {
            Ok(ItemResult::ok())
        } else {
            Ok(ItemResult::failure(format!(
                "You are not in the role '{}'.",
                role
            )))
        }
    }

    /// Ids of the caller's non-deleted reviews.
    pub async fn get_user_reviews(&self, caller: &Caller) -> Result<ItemResult<Vec<Uuid>>, AppError> {
        application_user_service::GET_USER_REVIEWS.authorize(caller)?;

        let Some(user_id) = caller.id() else {
            return Ok(ItemResult::success(Vec::new()));
        };

        let ids = ReviewRepository::new(self.db).ids_for_user(user_id).await?;

        Ok(ItemResult::success(ids))
    }
}
