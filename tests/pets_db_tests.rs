// tests/pets_db_tests.rs
// Table creation, idempotent seeding and listing against DATABASE_URL.
//
// The steps share one table, so they run in a single test.

mod common;

use shopfront::web_app::api::db;
use shopfront::web_app::api::pets::{self, SEED_NAMES, SEED_OWNER};

#[tokio::test]
async fn test_pets_seed_lifecycle() -> anyhow::Result<()> {
    let Some(pool) = common::try_test_pool().await else {
        return Ok(());
    };
    common::teardown_pets(&pool).await?;

    pets::ensure_pets_table(&pool).await?;
    assert!(pets::list_pets(&pool).await?.is_empty());

    let inserted = pets::seed_pets(&pool).await?;
    assert_eq!(inserted, 6);

    // Second call finds rows and leaves them alone
    let inserted = pets::seed_pets(&pool).await?;
    assert_eq!(inserted, 0);

    let rows = pets::list_pets(&pool).await?;
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|p| p.owner == SEED_OWNER));

    let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Carl", "Debbie", "Fiona", "Ian", "Liam", "Lip"]);

    let mut expected = SEED_NAMES.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);

    // The once-per-process init is a no-op on a seeded table
    db::set_test_pool(pool.clone());
    let shared = db::get_db().expect("test pool installed");
    pets::init_pets(&shared).await?;
    pets::init_pets(&shared).await?;
    assert_eq!(pets::list_pets(&shared).await?.len(), 6);

    Ok(())
}
