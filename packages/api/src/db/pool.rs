//! Database connection pool using the lazy OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::AppConfig;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
/// The connection string comes from [`AppConfig::from_env`].
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        let config = AppConfig::from_env();

        PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
    })
    .await
}
