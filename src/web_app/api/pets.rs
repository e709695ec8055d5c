// web_app/api/pets.rs - Pets table setup, seeding and listing
//
// The table is created and seeded on demand. `init_pets` runs once per
// process; the row-count check inside `seed_pets` keeps a second process
// (or a rerun after a restart) from inserting the default rows again.

use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::web_app::model::Pet;

pub const SEED_OWNER: &str = "Frank";
pub const SEED_NAMES: [&str; 6] = ["Fiona", "Carl", "Liam", "Debbie", "Ian", "Lip"];

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS pets (
        name VARCHAR(255),
        owner VARCHAR(255)
    )
"#;

static INITIALIZED: OnceCell<()> = OnceCell::const_new();

pub async fn ensure_pets_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
    Ok(())
}

/// Insert the default pets if the table is empty.
///
/// Returns how many rows were inserted, 0 when the table already had data.
pub async fn seed_pets(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Serialises concurrent seeders; plain reads are not blocked.
    sqlx::query("LOCK TABLE pets IN SHARE ROW EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pets")
        .fetch_one(&mut *tx)
        .await?;

    if count > 0 {
        tx.rollback().await?;
        tracing::debug!("Pets table already holds {} rows, skipping seed", count);
        return Ok(0);
    }

    for name in SEED_NAMES {
        sqlx::query("INSERT INTO pets (name, owner) VALUES ($1, $2)")
            .bind(name)
            .bind(SEED_OWNER)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!("Seeded pets table with {} rows", SEED_NAMES.len());
    Ok(SEED_NAMES.len() as u64)
}

/// Create and seed the table, at most once per process.
///
/// A failed attempt is not cached, the next call tries again.
pub async fn init_pets(pool: &PgPool) -> Result<(), sqlx::Error> {
    INITIALIZED
        .get_or_try_init(|| async {
            ensure_pets_table(pool).await?;
            seed_pets(pool).await?;
            Ok::<(), sqlx::Error>(())
        })
        .await?;
    Ok(())
}

/// All pets, ordered by name then owner. The table has no insertion-order column.
pub async fn list_pets(pool: &PgPool) -> Result<Vec<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>("SELECT name, owner FROM pets ORDER BY name, owner")
        .fetch_all(pool)
        .await
}
