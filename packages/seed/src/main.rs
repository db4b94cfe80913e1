//! Seed the `challenges` table with the default briefing set.
//!
//! One-shot administrative utility, run out-of-band with elevated
//! credentials rather than a user session. All upserts happen in a single
//! transaction: either every challenge lands or none do, and repeated runs
//! are idempotent because rows are keyed by fixed slug ids.
//!
//! ```sh
//! SERVICE_ACCOUNT_KEY='{"project_id":"ctf-arena","database_url":"postgres://..."}' \
//!     cargo run -p seed
//! ```
//!
//! Exit code 0 on success, 1 on any failure. A missing or malformed
//! credential fails before anything touches the database.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use api::models::Challenge;
use api::store::challenge::upsert_challenge;

const SERVICE_ACCOUNT_ENV: &str = "SERVICE_ACCOUNT_KEY";

/// Elevated credential supplied via [`SERVICE_ACCOUNT_ENV`].
#[derive(Debug, Deserialize)]
struct ServiceCredentials {
    #[serde(default)]
    project_id: String,
    #[serde(default)]
    database_url: String,
}

#[derive(Debug, Error)]
enum SeedError {
    #[error("Missing {SERVICE_ACCOUNT_ENV}. Provide your service account JSON via this env var.")]
    MissingCredential,
    #[error("{SERVICE_ACCOUNT_ENV} must be valid JSON: {0}")]
    MalformedCredential(serde_json::Error),
    #[error("Service account JSON is missing the project_id field. Check your credentials.")]
    MissingProjectId,
    #[error("Service account JSON is missing the database_url field. Check your credentials.")]
    MissingDatabaseUrl,
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to seed challenges: {0}")]
    Write(#[from] sqlx::Error),
}

/// Validate the raw credential payload. `None` means the variable was unset.
fn load_credentials(raw: Option<String>) -> Result<ServiceCredentials, SeedError> {
    let raw = raw.ok_or(SeedError::MissingCredential)?;
    let credentials: ServiceCredentials =
        serde_json::from_str(&raw).map_err(SeedError::MalformedCredential)?;
    if credentials.project_id.is_empty() {
        return Err(SeedError::MissingProjectId);
    }
    if credentials.database_url.is_empty() {
        return Err(SeedError::MissingDatabaseUrl);
    }
    Ok(credentials)
}

async fn seed_challenges(challenges: &[Challenge]) -> Result<usize, SeedError> {
    let credentials = load_credentials(std::env::var(SERVICE_ACCOUNT_ENV).ok())?;
    tracing::info!("Seeding project {}", credentials.project_id);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&credentials.database_url)
        .await?;

    sqlx::migrate!("../api/migrations").run(&pool).await?;

    let mut tx = pool.begin().await?;
    for challenge in challenges {
        upsert_challenge(&mut *tx, challenge).await?;
    }
    tx.commit().await?;

    Ok(challenges.len())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match seed_challenges(&Challenge::defaults()).await {
        Ok(count) => {
            tracing::info!("Seeded {} document(s) into the 'challenges' table.", count);
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_is_a_credential_error() {
        assert!(matches!(
            load_credentials(None),
            Err(SeedError::MissingCredential)
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            load_credentials(Some("not json".into())),
            Err(SeedError::MalformedCredential(_))
        ));
    }

    #[test]
    fn project_id_is_required() {
        let raw = r#"{"database_url": "postgres://localhost/ctf"}"#;
        assert!(matches!(
            load_credentials(Some(raw.into())),
            Err(SeedError::MissingProjectId)
        ));
    }

    #[test]
    fn database_url_is_required() {
        let raw = r#"{"project_id": "ctf-arena"}"#;
        assert!(matches!(
            load_credentials(Some(raw.into())),
            Err(SeedError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn well_formed_credentials_parse() {
        let raw = r#"{"project_id": "ctf-arena", "database_url": "postgres://localhost/ctf", "extra": 1}"#;
        let credentials = load_credentials(Some(raw.into())).unwrap();
        assert_eq!(credentials.project_id, "ctf-arena");
        assert_eq!(credentials.database_url, "postgres://localhost/ctf");
    }
}
