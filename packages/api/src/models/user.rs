//! # User model for authenticated commanders
//!
//! Two representations of a user:
//!
//! - [`User`] (server only) — the full `users` row, loaded via
//!   [`sqlx::FromRow`]. Includes the Argon2 `password_hash` and the audit
//!   timestamps, neither of which ever leaves the server.
//! - [`UserInfo`] — the client-safe projection that crosses the server/client
//!   boundary through server functions. The `Uuid` becomes a `String` so it
//!   works in WASM, and the hash is omitted.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full identity record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.display_name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let named = UserInfo {
            id: "1".into(),
            email: "jane@example.com".into(),
            name: Some("Commander Jane".into()),
        };
        assert_eq!(named.display_name(), "Commander Jane");

        let anonymous = UserInfo {
            id: "2".into(),
            email: "anon@example.com".into(),
            name: None,
        };
        assert_eq!(anonymous.display_name(), "anon@example.com");
    }
}
