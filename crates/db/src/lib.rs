//! Data access for the catalog: pool setup, schema bootstrap, and the
//! `products` repository.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// How long a statement waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

fn pool_options(config: &PoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Create a connection pool from a database URL, connecting eagerly.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "Connecting database pool"
    );
    pool_options(config).connect(database_url).await
}

/// Create a pool that only parses the URL; connections are opened on first use.
pub fn create_lazy_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    pool_options(config).connect_lazy(database_url)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema scripts from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
