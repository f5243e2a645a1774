//! # Database Store
//!
//! Database connection pool construction.

use crate::config::Config;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

/// Type alias for the SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool for the configured database.
pub async fn create_pool(config: &Config) -> anyhow::Result<DbPool> {
    let options = config
        .database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_pool_connects_to_in_memory_database() {
        let config = Config {
            port: 5000,
            database_url: "sqlite::memory:".to_string(),
        };

        let pool = create_pool(&config).await.expect("pool should connect");
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("ping should succeed");
    }

    #[tokio::test]
    async fn create_pool_rejects_malformed_url() {
        let config = Config {
            port: 5000,
            database_url: "postgres://not-sqlite".to_string(),
        };

        assert!(create_pool(&config).await.is_err());
    }
}
