//! # API crate — shared fullstack server functions for the CTF portal
//!
//! Defines every Dioxus server function the web frontend calls, plus the
//! supporting modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Identity provider: account creation, credential checks, Argon2 hashing, sign-in rate limiting, session keys |
//! | [`config`] | `server` | Deployment identifiers from `CTF_*` environment variables with fallback defaults |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows (`User`, `Challenge`) and their client-safe projections (`UserInfo`) |
//! | [`store`] | `server` | Merge-upsert writers for profiles and challenges |
//!
//! ## Server functions
//!
//! Each public `async fn` below is compiled twice: once with full server
//! logic (behind `#[cfg(feature = "server")]`) and once as a thin client
//! stub that forwards the call over HTTP.
//!
//! - `get_current_user` — resolve the session to a [`UserInfo`], if any.
//! - `sign_up` — create an identity, set its display name, upsert the
//!   profile, and open a session.
//! - `sign_in` — check credentials and open a session.
//! - `sign_out` — flush the session.
//!
//! Failures carry a stable [`auth::AuthCode`] token inside the
//! `ServerFnError` message; the client maps tokens to friendly sentences.

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
pub mod models;
pub mod store;

pub use auth::AuthCode;
pub use models::{Challenge, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::find_by_id(pool, user_uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Create a commander account and open a session.
///
/// The profile upsert is a second, independent write: if it fails the
/// identity (and the session) remain — the caller sees the generic error.
#[cfg(feature = "server")]
#[post("/api/auth/signup", session: tower_sessions::Session)]
pub async fn sign_up(
    name: String,
    email: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::create_identity(pool, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let trimmed_name = name.trim().to_string();
    if !trimmed_name.is_empty() {
        auth::set_display_name(pool, user.id, &trimmed_name)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    if let Err(e) = store::profile::upsert_profile(pool, user.id, &trimmed_name, &user.email).await
    {
        tracing::error!("Profile write failed for {}: {}", user.id, e);
        return Err(ServerFnError::new(AuthCode::Unknown.as_str()));
    }

    Ok(UserInfo {
        id: user.id.to_string(),
        email: user.email,
        name: (!trimmed_name.is_empty()).then_some(trimmed_name),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/signup")]
pub async fn sign_up(
    name: String,
    email: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/signin", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::authenticate(pool, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/signin")]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/signout", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/signout")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}
