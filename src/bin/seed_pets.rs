// Create and seed the pets table, then print its contents.
//
// Run with: cargo run --bin seed_pets --features db-tools

use anyhow::Result;
use shopfront::web_app::api::{db, pets};
use shopfront::web_app::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    let pool = db::create_pool(&config).await?;
    println!("✓ Connected to database");

    pets::ensure_pets_table(&pool).await?;
    let inserted = pets::seed_pets(&pool).await?;
    if inserted > 0 {
        println!("✓ Inserted {} pets", inserted);
    } else {
        println!("✓ Pets table already seeded");
    }

    let rows = pets::list_pets(&pool).await?;
    println!("\n{} pets:", rows.len());
    for pet in rows {
        println!("  - {} - {}", pet.name, pet.owner);
    }

    Ok(())
}
