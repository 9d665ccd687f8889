use anyhow::Result;
use sqlx::{Connection, Executor, PgConnection};

use crate::{
    catalog,
    config::AppConfig,
    db::{self, DbPool},
    store,
};

const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id VARCHAR(64) PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    price NUMERIC(10, 2) NOT NULL,
    flavor VARCHAR(255),
    img TEXT
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id VARCHAR(64) PRIMARY KEY,
    order_date TIMESTAMPTZ NOT NULL,
    total_amount NUMERIC(10, 2) NOT NULL,
    status VARCHAR(64) NOT NULL
)
"#;

const CREATE_ORDER_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS order_items (
    item_id BIGSERIAL PRIMARY KEY,
    order_id VARCHAR(64) NOT NULL REFERENCES orders (order_id) ON DELETE CASCADE,
    product_id VARCHAR(64) NOT NULL,
    product_name VARCHAR(255) NOT NULL,
    quantity INT NOT NULL,
    unit_price NUMERIC(10, 2) NOT NULL
)
"#;

/// Create the target database if it does not exist yet.
///
/// Managed services often forbid CREATE DATABASE; callers treat a failure
/// here as non-fatal and carry on against the database that is already there.
pub async fn ensure_database(config: &AppConfig) -> Result<()> {
    let mut conn = PgConnection::connect_with(&db::admin_connect_options(config)).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&config.db_name)
            .fetch_one(&mut conn)
            .await?;

    if !exists {
        // CREATE DATABASE cannot be parameterized; the name comes from
        // operator config, not request input.
        let create = format!(r#"CREATE DATABASE "{}""#, config.db_name);
        conn.execute(create.as_str()).await?;
        tracing::info!(database = %config.db_name, "created database");
    }

    conn.close().await?;
    Ok(())
}

/// Idempotent table setup; safe to run on every boot.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    for statement in [CREATE_PRODUCTS, CREATE_ORDERS, CREATE_ORDER_ITEMS] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

/// Upsert the fixed catalog so product edits land on redeploy without
/// duplicating rows.
pub async fn seed_catalog(pool: &DbPool) -> Result<()> {
    for product in catalog::seed_products() {
        store::upsert_product(pool, &product).await?;
    }

    tracing::debug!("catalog seeded");
    Ok(())
}

/// Table setup plus seeding, the startup half that runs on the application
/// pool.
pub async fn prepare_storage(pool: &DbPool) -> Result<()> {
    ensure_schema(pool).await?;
    seed_catalog(pool).await?;
    Ok(())
}
