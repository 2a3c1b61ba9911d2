use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;

/// Creates the shared connection pool used by every repository
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}
