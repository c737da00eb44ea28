//! # MedCal DB
//!
//! SQLite persistence for doctor calendars. Owns the `time_slots` and
//! `doctor_buffer` tables and exposes them to the booking layer through the
//! [`store::SlotStore`] trait. No overlap rules live here.

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use eyre::{Result, WrapErr};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub use store::{SlotStore, SqliteSlotStore};

pub type DbPool = Pool<Sqlite>;

/// Opens a pool holding exactly one connection.
///
/// The connection is never recycled, so `sqlite::memory:` databases live as
/// long as the pool does.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
        .wrap_err_with(|| format!("Failed to connect to {database_url}"))?;

    Ok(pool)
}
