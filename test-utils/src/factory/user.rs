//! Application user factory.
//!
//! Users are created with an argon2 hash of their password and any roles requested, so
//! they can sign in through the real login path.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "Passw0rd!";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .super_admin()
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    roles: Vec<&'static str>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: `DEFAULT_PASSWORD`
    /// - roles: `User`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            roles: vec!["User"],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email, stored as given; the application stores emails lowercased.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Adds the SuperAdmin role on top of User.
    pub fn super_admin(mut self) -> Self {
        self.roles.push("SuperAdmin");
        self
    }

    /// Creates the user without any role.
    pub fn no_roles(mut self) -> Self {
        self.roles.clear();
        self
    }

    /// Builds and inserts the user and its roles.
    ///
    /// # Returns
    /// - `Ok(entity::application_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or the password failed to hash
    pub async fn build(self) -> Result<entity::application_user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?
            .to_string();

        let user = entity::application_user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for role in self.roles {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role: ActiveValue::Set(role.to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user holding the User role.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::application_user::Model, DbErr> {
    UserFactory::new(db).build().await
}
