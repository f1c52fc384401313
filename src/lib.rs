mod data_formats;
mod db_helpers;
mod errors;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::SqliteConnectOptions,
    Sqlite, SqlitePool,
};
use std::str::FromStr;

pub use data_formats::*;
pub use db_helpers::*;
pub use errors::StoreError;
pub use models::*;

/// Opens the pool pointed at by `DATABASE_URL`, creating the database file
/// if needed, and applies the embedded migrations. Foreign-key enforcement is
/// switched on so the declared cascades actually fire.
pub async fn init_db() -> Result<SqlitePool> {
    dotenvy::dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    if !Sqlite::database_exists(&db_url).await.unwrap_or(false) {
        tracing::info!("creating database {}", db_url);
        Sqlite::create_database(&db_url)
            .await
            .context("failed to create database")?;
    }
    let options = SqliteConnectOptions::from_str(&db_url)
        .context("invalid DATABASE_URL")?
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(options).await?;
    tracing::info!("running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("migrations completed");
    Ok(pool)
}
