use std::{str::FromStr, sync::Arc};

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::operation::Role,
    server::{
        config::Config,
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
    },
};

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(
        signing_key: &str,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(signing_key.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(signing_key.as_bytes())),
            issuer: issuer.into(),
            audience: audience.into(),
            lifetime,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_signing_key,
            config.jwt_issuer.clone(),
            config.jwt_audience.clone(),
            Duration::minutes(config.jwt_expiration_minutes),
        )
    }

    /// Signs a token for `user` that expires after the configured lifetime.
    pub fn issue(&self, user: &AuthUser) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.iter().map(|r| r.as_str().to_string()).collect(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Validates signature, issuer, audience and expiry, then rebuilds the user from the claims.
    pub fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!("Bearer token rejected: {}", e);
            AuthError::InvalidToken
        })?;
        let claims = data.claims;

        let id = claims.sub.parse::<i32>().map_err(|_| AuthError::InvalidToken)?;
        let roles = claims
            .roles
            .iter()
            .filter_map(|role| Role::from_str(role).ok())
            .collect();

        Ok(AuthUser {
            id,
            name: claims.name,
            email: claims.email,
            roles,
        })
    }
}
