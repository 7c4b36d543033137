//! Account data repository.
//!
//! Stores accounts with their argon2 password hash and role assignments. Roles are kept
//! as their wire strings so an unknown value in the table is skipped rather than failing
//! the whole read.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::operation::Role, server::model::user::CreateUserParams};

/// Repository providing database operations for accounts and their roles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an account by email address.
    ///
    /// # Arguments
    /// - `email` - Normalized email address
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found, including its password hash
    /// - `Ok(None)` - No account uses this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::application_user::Model>, DbErr> {
        entity::prelude::ApplicationUser::find()
            .filter(entity::application_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::application_user::Model>, DbErr> {
        entity::prelude::ApplicationUser::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ApplicationUser::find()
            .filter(entity::application_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(
        &self,
        params: CreateUserParams,
    ) -> Result<entity::application_user::Model, DbErr> {
        entity::application_user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::application_user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Gets the roles assigned to an account.
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - Assigned roles in assignment order, unknown values skipped
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_roles(&self, user_id: i32) -> Result<Vec<Role>, DbErr> {
        let rows = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match row.role.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!("Skipping role of user {}: {}", user_id, e);
                    None
                }
            })
            .collect())
    }

    /// Assigns a role. Assigning a role the account already holds does nothing.
    pub async fn add_role(&self, user_id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::UserRole::insert(entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_role::Column::UserId,
                entity::user_role::Column::Role,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether any account holds the SuperAdmin role.
    pub async fn super_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::Role.eq(Role::SuperAdmin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
