// common/mod.rs - Shared helpers for the database tests

use shopfront::web_app::api::db;
use shopfront::web_app::config::AppConfig;
use sqlx::PgPool;

/// Connect to `DATABASE_URL`, or `None` when no database is reachable so the
/// caller can skip.
pub async fn try_test_pool() -> Option<PgPool> {
    let config = AppConfig::from_env();
    match db::create_pool(&config).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping database test, cannot connect: {}", e);
            None
        }
    }
}

/// Drop the pets table so each run starts from an empty store
pub async fn teardown_pets(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query("DROP TABLE IF EXISTS pets")
        .execute(pool)
        .await?;
    Ok(())
}
