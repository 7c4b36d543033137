use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    model::operation::Role,
    server::{
        config::Config,
        data::user::UserRepository,
        error::{config::ConfigError, AppError},
        model::user::CreateUserParams,
        service::{
            identity::password::{hash_password, password_problems},
            login::normalize_email,
        },
    },
};

const SESSION_INACTIVITY_DAYS: i64 = 7;
const SEEDED_ADMIN_NAME: &str = "Administrator";

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer backed by the application database.
///
/// Sessions live in a table managed by the session store, created here if missing, and
/// expire after seven days without a request.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))))
}

/// Makes sure a SuperAdmin exists.
///
/// When no user holds the SuperAdmin role and `ADMIN_EMAIL`/`ADMIN_PASSWORD` are set, the
/// account with that email is promoted, or created first if it does not exist. Without
/// those variables a warning is logged and startup continues. A configured password that
/// breaks the password rules stops startup with `ConfigError::InvalidEnvVar`.
pub async fn seed_super_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.super_admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!("No SuperAdmin exists, set ADMIN_EMAIL and ADMIN_PASSWORD to seed one");
        return Ok(());
    };

    let problems = password_problems(password);
    if !problems.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: "ADMIN_PASSWORD".to_string(),
            reason: problems.join(" "),
        }
        .into());
    }

    let email = normalize_email(email);
    let user = match user_repo.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            user_repo
                .create(CreateUserParams {
                    name: SEEDED_ADMIN_NAME.to_string(),
                    email,
                    password_hash: hash_password(password)?,
                })
                .await?
        }
    };

    user_repo.add_role(user.id, Role::User).await?;
    user_repo.add_role(user.id, Role::SuperAdmin).await?;

    tracing::info!("Seeded SuperAdmin {} ({})", user.email, user.id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn config(admin_email: Option<&str>, admin_password: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_signing_key: "test-signing-key".to_string(),
            jwt_issuer: "gamehub".to_string(),
            jwt_audience: "gamehub".to_string(),
            jwt_expiration_minutes: 60,
            bind_address: "127.0.0.1:0".to_string(),
            app_url: "http://localhost:8080".to_string(),
            admin_email: admin_email.map(str::to_string),
            admin_password: admin_password.map(str::to_string),
        }
    }

    /// Tests seeding when credentials are configured.
    ///
    /// Expected: account created holding both roles, seeding twice is a no-op
    #[tokio::test]
    async fn seeds_configured_admin() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config(Some(" Admin@Example.com "), Some("Passw0rd!"));

        seed_super_admin(db, &config).await?;
        seed_super_admin(db, &config).await?;

        let repo = UserRepository::new(db);
        let user = repo.find_by_email("admin@example.com").await?.unwrap();
        let roles = repo.get_roles(user.id).await?;
        assert_eq!(roles, vec![Role::User, Role::SuperAdmin]);

        Ok(())
    }

    /// Tests that a weak configured password is refused.
    ///
    /// Expected: ConfigError naming ADMIN_PASSWORD, no account created
    #[tokio::test]
    async fn refuses_weak_admin_password() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = seed_super_admin(db, &config(Some("admin@example.com"), Some("a"))).await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "ADMIN_PASSWORD"
        ));
        let repo = UserRepository::new(db);
        assert!(repo.find_by_email("admin@example.com").await?.is_none());
        assert!(!repo.super_admin_exists().await?);

        Ok(())
    }

    /// Tests seeding without credentials.
    ///
    /// Expected: Ok, no SuperAdmin
    #[tokio::test]
    async fn skips_seeding_without_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        seed_super_admin(db, &config(None, None)).await?;

        assert!(!UserRepository::new(db).super_admin_exists().await?);

        Ok(())
    }
}
