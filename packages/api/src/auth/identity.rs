//! Identity provider operations over the `users` table.
//!
//! This module is the server-side counterpart of the hosted auth service the
//! client used to talk to: account creation, credential checks, and the
//! display-name update that follows a successful sign-up. Every failure maps
//! to one [`AuthCode`] token via the error's `Display` impl, which is what
//! the server functions embed in their `ServerFnError` messages.

use std::sync::OnceLock;

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::code::AuthCode;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::rate_limit::SignInLimiter;
use crate::models::User;

/// Minimum password length, matched by the client-side submit guard.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("auth/email-already-in-use")]
    EmailInUse,
    #[error("auth/invalid-email")]
    InvalidEmail,
    #[error("auth/weak-password")]
    WeakPassword,
    #[error("auth/invalid-credentials")]
    InvalidCredentials,
    #[error("auth/too-many-requests")]
    TooManyRequests,
    #[error("auth/unknown: {0}")]
    Provider(String),
}

impl IdentityError {
    pub fn code(&self) -> AuthCode {
        match self {
            IdentityError::EmailInUse => AuthCode::EmailInUse,
            IdentityError::InvalidEmail => AuthCode::InvalidEmail,
            IdentityError::WeakPassword => AuthCode::WeakPassword,
            IdentityError::InvalidCredentials => AuthCode::InvalidCredentials,
            IdentityError::TooManyRequests => AuthCode::TooManyRequests,
            IdentityError::Provider(_) => AuthCode::Unknown,
        }
    }
}

impl From<sqlx::Error> for IdentityError {
    fn from(e: sqlx::Error) -> Self {
        IdentityError::Provider(e.to_string())
    }
}

fn limiter() -> &'static SignInLimiter {
    static LIMITER: OnceLock<SignInLimiter> = OnceLock::new();
    LIMITER.get_or_init(SignInLimiter::new)
}

/// Check that an email looks deliverable. Matches the provider's notion of a
/// malformed address, not full RFC 5322.
pub fn validate_email(email: &str) -> Result<(), IdentityError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(IdentityError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(IdentityError::InvalidEmail);
    }
    Ok(())
}

/// Enforce the minimum password length.
pub fn validate_password(password: &str) -> Result<(), IdentityError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(IdentityError::WeakPassword);
    }
    Ok(())
}

/// Create a new identity. Does NOT set a display name; that happens as a
/// separate step after creation, mirroring the provider contract.
pub async fn create_identity(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, IdentityError> {
    let email = email.trim().to_lowercase();
    validate_email(&email)?;
    validate_password(password)?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(IdentityError::EmailInUse);
    }

    let password_hash =
        hash_password(password).map_err(IdentityError::Provider)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        // Two concurrent sign-ups can both pass the existence check; the
        // unique index settles it.
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            IdentityError::EmailInUse
        } else {
            IdentityError::Provider(e.to_string())
        }
    })?;

    Ok(user)
}

/// Set the display name on an existing identity record.
pub async fn set_display_name(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<(), IdentityError> {
    sqlx::query("UPDATE users SET display_name = $2, updated_at = NOW() WHERE id = $1")
        .bind(user_id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(())
}

/// Check credentials. Unknown email and wrong password are deliberately
/// indistinguishable to the caller.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, IdentityError> {
    let email = email.trim().to_lowercase();
    validate_email(&email)?;

    if limiter().is_limited(&email) {
        return Err(IdentityError::TooManyRequests);
    }

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        limiter().record_failure(&email);
        return Err(IdentityError::InvalidCredentials);
    };

    let valid =
        verify_password(password, &user.password_hash).map_err(IdentityError::Provider)?;
    if !valid {
        limiter().record_failure(&email);
        return Err(IdentityError::InvalidCredentials);
    }

    limiter().record_success(&email);
    Ok(user)
}

/// Look up an identity by id, for session resolution.
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, IdentityError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("jane@nodot").is_err());
    }

    #[test]
    fn password_validation_enforces_minimum_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn error_display_matches_auth_code_tokens() {
        assert_eq!(
            IdentityError::EmailInUse.to_string(),
            AuthCode::EmailInUse.as_str()
        );
        assert_eq!(
            IdentityError::InvalidCredentials.to_string(),
            AuthCode::InvalidCredentials.as_str()
        );
        let provider = IdentityError::Provider("boom".into());
        assert_eq!(AuthCode::from_message(&provider.to_string()), AuthCode::Unknown);
    }
}
