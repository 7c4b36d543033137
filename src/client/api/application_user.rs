use uuid::Uuid;

use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::{api::ItemResult, operation::application_user_service, params::RoleParams},
};

pub struct ApplicationUserServiceClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ApplicationUserServiceClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_roles(&self) -> Result<ItemResult<Vec<String>>, ApiError> {
        self.api
            .invoke_empty(&application_user_service::GET_ROLES)
            .await
    }

    pub async fn has_role(&self, role: &str) -> Result<ItemResult, ApiError> {
        let params = RoleParams {
            role: role.to_string(),
        };
        self.api
            .invoke(&application_user_service::HAS_ROLE, &params)
            .await
    }

    /// Ids of the caller's reviews.
    pub async fn get_user_reviews(&self) -> Result<ItemResult<Vec<Uuid>>, ApiError> {
        self.api
            .invoke_empty(&application_user_service::GET_USER_REVIEWS)
            .await
    }
}
