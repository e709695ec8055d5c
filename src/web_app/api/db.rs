// web_app/api/db.rs - Database connection pool setup
//
// This module provides database pool initialization.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

use crate::web_app::config::AppConfig;

/// How long a request waits for a connection before giving up
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    {
        let guard = TEST_POOL_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Create a PostgreSQL connection pool and open the first connection
pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect(&config.database_url).await
}

/// Create a pool that connects on first use.
///
/// The server starts this way so the products page keeps working while the
/// database is unreachable.
pub fn create_lazy_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.database_url)
}
