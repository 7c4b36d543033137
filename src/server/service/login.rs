//! Login service: sign-in, token issuance and account management.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ItemResult,
        operation::{login_service, Role},
        user::{TokenDto, UserInfoDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthUser, Caller},
            session::AuthSession,
        },
        model::user::CreateUserParams,
        service::identity::{
            password::{hash_password, password_problems, verify_password},
            token::TokenIssuer,
        },
    },
};

const MSG_BAD_CREDENTIALS: &str = "Unable to log in, please check your credentials.";
const MSG_EMAIL_IN_USE: &str = "The provided email address is already in use.";
const MSG_ACCOUNT_NOT_FOUND: &str = "Unable to find the account.";
const MSG_PASSWORD_NOT_UPDATED: &str = "Unable to update the password.";
const MSG_NOT_SIGNED_IN: &str = "You are not signed in";

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct LoginService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenIssuer,
}

impl<'a> LoginService<'a> {
    /// Creates a new LoginService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Issuer used by `get_token`
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and signs the session in.
    pub async fn login(
        &self,
        caller: &Caller,
        session: &AuthSession<'_>,
        email: &str,
        password: &str,
    ) -> Result<ItemResult, AppError> {
        login_service::LOGIN.authorize(caller)?;

        let Some(user) = self.authenticate(email, password).await? else {
            return Ok(ItemResult::failure(MSG_BAD_CREDENTIALS));
        };

        session.sign_in(&user).await?;
        tracing::info!("User {} signed in", user.id);

        Ok(ItemResult::ok())
    }

    /// Verifies credentials, signs the session in and issues a bearer token.
    pub async fn get_token(
        &self,
        caller: &Caller,
        session: &AuthSession<'_>,
        email: &str,
        password: &str,
    ) -> Result<ItemResult<TokenDto>, AppError> {
        login_service::GET_TOKEN.authorize(caller)?;

        let Some(user) = self.authenticate(email, password).await? else {
            return Ok(ItemResult::failure(MSG_BAD_CREDENTIALS));
        };

        let token = self.tokens.issue(&user)?;
        session.sign_in(&user).await?;
        tracing::info!("Issued token for user {}", user.id);

        Ok(ItemResult::success(TokenDto { token }))
    }

    pub async fn logout(
        &self,
        caller: &Caller,
        session: &AuthSession<'_>,
    ) -> Result<ItemResult, AppError> {
        login_service::LOGOUT.authorize(caller)?;

        session.clear().await?;

        Ok(ItemResult::ok())
    }

    /// Creates an account holding the `User` role.
    ///
    /// # Returns
    /// - `Ok(ok)` - Account created
    /// - `Ok(failure)` - Email already in use, missing name or email, or a password that
    ///   breaks the policy
    pub async fn create_account(
        &self,
        caller: &Caller,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ItemResult, AppError> {
        login_service::CREATE_ACCOUNT.authorize(caller)?;

        let email = normalize_email(email);
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Ok(ItemResult::failure(MSG_EMAIL_IN_USE));
        }

        let mut problems = Vec::new();
        if name.trim().is_empty() {
            problems.push("A name is required.");
        }
        if email.is_empty() || !email.contains('@') {
            problems.push("A valid email address is required.");
        }
        problems.extend(password_problems(password));
        if !problems.is_empty() {
            return Ok(ItemResult::failure(format!(
                "Unable to create the account: {}",
                problems.join(" ")
            )));
        }

        let user = user_repo
            .create(CreateUserParams {
                name: name.trim().to_string(),
                email,
                password_hash: hash_password(password)?,
            })
            .await?;
        user_repo.add_role(user.id, Role::User).await?;

        tracing::info!("Created account {} for {}", user.id, user.name);

        Ok(ItemResult::ok())
    }

    /// Changes the caller's password after checking the current one.
    pub async fn change_password(
        &self,
        caller: &Caller,
        current_password: &str,
        new_password: &str,
    ) -> Result<ItemResult, AppError> {
        login_service::CHANGE_PASSWORD.authorize(caller)?;
        let user_id = caller.id().ok_or(AuthError::NotAuthenticated)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Ok(ItemResult::failure(MSG_ACCOUNT_NOT_FOUND));
        };

        if !verify_password(current_password, &user.password_hash)
            || !password_problems(new_password).is_empty()
        {
            return Ok(ItemResult::failure(MSG_PASSWORD_NOT_UPDATED));
        }

        user_repo
            .update_password(user.id, hash_password(new_password)?)
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(ItemResult::ok())
    }

    pub fn is_logged_in(&self, caller: &Caller) -> Result<ItemResult, AppError> {
        login_service::IS_LOGGED_IN.authorize(caller)?;

        if caller.is_authenticated() {
            Ok(ItemResult::ok())
        } else {
            Ok(ItemResult::failure(MSG_NOT_SIGNED_IN))
        }
    }

    /// Describes the caller. Every field is empty for an anonymous caller.
    pub fn get_user_info(&self, caller: &Caller) -> Result<ItemResult<UserInfoDto>, AppError> {
        login_service::GET_USER_INFO.authorize(caller)?;

        let info = match &caller.user {
            Some(user) => UserInfoDto {
                name: user.name.clone(),
                email: user.email.clone(),
                roles: user.roles.iter().map(|r| r.as_str().to_string()).collect(),
            },
            None => UserInfoDto::default(),
        };

        Ok(ItemResult::success(info))
    }

    /// Resolves credentials into a signed-in identity.
    ///
    /// # Returns
    /// - `Ok(Some(AuthUser))` - Credentials are valid
    /// - `Ok(None)` - Unknown email or wrong password
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<AuthUser>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&normalize_email(email)).await? else {
            return Ok(None);
        };
        if !verify_password(password, &user.password_hash) {
            tracing::debug!("Wrong password for user {}", user.id);
            return Ok(None);
        }

        let roles = user_repo.get_roles(user.id).await?;

        Ok(Some(AuthUser {
            id: user.id,
            name: user.name,
            email: user.email,
            roles,
        }))
    }
}
