use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes `password` into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string.
///
/// An unparsable stored hash never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Returns every rule `password` breaks. An empty list means the password is acceptable.
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push("Passwords must be at least 6 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("Passwords must have at least one digit ('0'-'9').");
    }
    if !password.chars().any(char::is_lowercase) {
        problems.push("Passwords must have at least one lowercase ('a'-'z').");
    }
    if !password.chars().any(char::is_uppercase) {
        problems.push("Passwords must have at least one uppercase ('A'-'Z').");
    }
    if password.chars().all(char::is_alphanumeric) {
        problems.push("Passwords must have at least one non alphanumeric character.");
    }

    problems
}
