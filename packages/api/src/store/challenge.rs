//! Challenge writer, used by the seed binary.

use sqlx::PgExecutor;

use crate::models::Challenge;

/// Upsert one challenge row. Keyed by the fixed slug id; on conflict the
/// content fields are replaced and `created_at` is preserved, so repeated
/// seed runs are idempotent.
///
/// Takes any executor so the seed binary can run every upsert inside a
/// single transaction (all-or-nothing).
pub async fn upsert_challenge(
    executor: impl PgExecutor<'_>,
    challenge: &Challenge,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO challenges (id, title, prompt, difficulty, is_active, created_at)
         VALUES ($1, $2, $3, $4, $5, NOW())
         ON CONFLICT (id) DO UPDATE SET
            title = EXCLUDED.title,
            prompt = EXCLUDED.prompt,
            difficulty = EXCLUDED.difficulty,
            is_active = EXCLUDED.is_active",
    )
    .bind(&challenge.id)
    .bind(&challenge.title)
    .bind(&challenge.prompt)
    .bind(&challenge.difficulty)
    .bind(challenge.is_active)
    .execute(executor)
    .await?;
    Ok(())
}
