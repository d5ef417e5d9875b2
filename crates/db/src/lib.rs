//! SQLite persistence for incidents, inventory, volunteers and shelters.
//!
//! Every repository takes the pool explicitly; nothing here holds state
//! between calls.

pub mod bootstrap;
pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use bootstrap::{run_bootstrap, SeedSummary};

pub type DbPool = sqlx::SqlitePool;

/// Storage format for timestamps written by this crate.
///
/// Matches the schema default (`strftime('%Y-%m-%d %H:%M:%f', 'now')`) up
/// to the number of fractional digits, so text ordering equals time
/// ordering across both sources.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Create a connection pool from a database URL, creating the database
/// file if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
