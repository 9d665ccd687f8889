use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;

use crate::config::AppConfig;

pub type DbPool = sqlx::PgPool;

/// Connection options for the application database.
pub fn connect_options(config: &AppConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .application_name(&config.pool_name)
}

/// Connection options for the server's maintenance database, used only by the
/// bootstrap step that creates the application database.
pub fn admin_connect_options(config: &AppConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database("postgres")
        .application_name(&config.pool_name)
}

/// Create the bounded connection pool handed to every request handler.
/// Acquisition waits at most 30 seconds before surfacing a pool timeout.
pub async fn create_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_options(config))
        .await?;

    Ok(pool)
}
