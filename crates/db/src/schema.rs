use eyre::Result;
use tracing::info;

use crate::DbPool;

pub async fn initialize_database(pool: &DbPool) -> Result<()> {
    info!("Initializing database schema...");

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'AVAILABLE'
                CHECK (status IN ('AVAILABLE', 'UNAVAILABLE', 'RESERVED', 'CANCELLED'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create doctor_buffer table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctor_buffer (
            user_id TEXT PRIMARY KEY,
            buffer_minutes INTEGER NOT NULL DEFAULT 0 CHECK (buffer_minutes >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_time_slots_user_id ON time_slots(user_id);")
        .execute(pool)
        .await?;
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_time_slots_user_interval
        ON time_slots(user_id, start_time, end_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
