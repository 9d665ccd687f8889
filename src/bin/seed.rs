use elegance_chocolat_api::{bootstrap, config::AppConfig, db::create_pool};

// Operational bootstrap runner. Unlike startup, failures here are loud so a
// broken environment is caught before deploy.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    bootstrap::ensure_database(&config).await?;

    let pool = create_pool(&config).await?;
    bootstrap::ensure_schema(&pool).await?;
    bootstrap::seed_catalog(&pool).await?;

    println!(
        "Bootstrap complete: database \"{}\" has schema and seeded catalog.",
        config.db_name
    );
    Ok(())
}
