use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ISSUER: &str = "gamehub";
const DEFAULT_JWT_AUDIENCE: &str = "gamehub";
const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
/// Tokens live at most one year.
const MAX_JWT_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_signing_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expiration_minutes: i64,

    pub bind_address: String,
    pub app_url: String,

    /// Credentials of the SuperAdmin seeded when none exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_signing_key: required("JWT_SIGNING_KEY")?,
            jwt_issuer: optional("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
            jwt_audience: optional("JWT_AUDIENCE")
                .unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string()),
            jwt_expiration_minutes: expiration_minutes(parsed("JWT_EXPIRATION_MINUTES")?)?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

/// Applies the default and rejects lifetimes outside `1..=MAX_JWT_EXPIRATION_MINUTES`.
fn expiration_minutes(value: Option<i64>) -> Result<i64, ConfigError> {
    let minutes = value.unwrap_or(DEFAULT_JWT_EXPIRATION_MINUTES);

    if (1..=MAX_JWT_EXPIRATION_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRATION_MINUTES".to_string(),
            reason: format!(
                "{} is not between 1 and {} minutes",
                minutes, MAX_JWT_EXPIRATION_MINUTES
            ),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are treated the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(name)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
