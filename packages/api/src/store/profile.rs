//! Profile writer.

use sqlx::PgPool;
use uuid::Uuid;

/// Upsert the profile row for a user. Merge semantics: on conflict only
/// `name` and `email` are updated; `created_at` keeps its original
/// server-assigned value.
///
/// Called once, immediately after identity creation. Not retried on failure,
/// and failure does not roll back the identity — an identity without a
/// profile is an accepted state.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO profiles (user_id, name, email, created_at)
         VALUES ($1, $2, $3, NOW())
         ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            email = EXCLUDED.email",
    )
    .bind(user_id)
    .bind(name)
    .bind(email)
    .execute(pool)
    .await?;
    Ok(())
}
