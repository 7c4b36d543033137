use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::{
        api::ItemResult,
        operation::login_service,
        params::{ChangePasswordParams, CreateAccountParams, CredentialsParams},
        user::{TokenDto, UserInfoDto},
    },
};

pub struct LoginServiceClient<'a> {
    api: &'a ApiClient,
}

impl<'a> LoginServiceClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Signs the client's cookie session in.
    pub async fn login(&self, email: &str, password: &str) -> Result<ItemResult, ApiError> {
        self.api
            .invoke(&login_service::LOGIN, &credentials(email, password))
            .await
    }

    /// Gets a bearer token, usable through `ApiClient::set_bearer`.
    pub async fn get_token(&self, email: &str, password: &str) -> Result<ItemResult<TokenDto>, ApiError> {
        self.api
            .invoke(&login_service::GET_TOKEN, &credentials(email, password))
            .await
    }

    pub async fn logout(&self) -> Result<ItemResult, ApiError> {
        self.api.invoke_empty(&login_service::LOGOUT).await
    }

    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ItemResult, ApiError> {
        let params = CreateAccountParams {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.api
            .invoke(&login_service::CREATE_ACCOUNT, &params)
            .await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ItemResult, ApiError> {
        let params = ChangePasswordParams {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.api
            .invoke(&login_service::CHANGE_PASSWORD, &params)
            .await
    }

    pub async fn is_logged_in(&self) -> Result<ItemResult, ApiError> {
        self.api.invoke_empty(&login_service::IS_LOGGED_IN).await
    }

    pub async fn get_user_info(&self) -> Result<ItemResult<UserInfoDto>, ApiError> {
        self.api.invoke_empty(&login_service::GET_USER_INFO).await
    }
}

fn credentials(email: &str, password: &str) -> CredentialsParams {
    CredentialsParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}
