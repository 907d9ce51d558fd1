// src/db.rs

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::DataError;

/// Opens the connection pool and applies the embedded migrations.
///
/// `database_url` is the single external configuration knob, e.g.
/// `sqlite://lms.db?mode=rwc` for a file store or `sqlite::memory:` for an
/// ephemeral one. Foreign keys stay enabled so the declared ON DELETE
/// actions back up the checks done in the store layer.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, DataError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database exists per connection; a larger pool would hand
    // out blank copies.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
