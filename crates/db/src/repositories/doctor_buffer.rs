use crate::models::DbDoctorBuffer;
use crate::DbPool;
use eyre::{Result, WrapErr};
use medcal_core::models::OwnerId;

/// Buffer in minutes; 0 when the owner never set one.
pub async fn get_doctor_buffer(pool: &DbPool, owner: OwnerId) -> Result<u32> {
    let row = sqlx::query_as::<_, DbDoctorBuffer>(
        r#"
        SELECT user_id, buffer_minutes
        FROM doctor_buffer
        WHERE user_id = ?
        "#,
    )
    .bind(owner.to_string())
    .fetch_optional(pool)
    .await?;

    row.map_or(Ok(0), |row| row.minutes())
}

pub async fn set_doctor_buffer(pool: &DbPool, owner: OwnerId, minutes: u32) -> Result<()> {
    tracing::debug!("Setting buffer: owner={}, minutes={}", owner, minutes);

    sqlx::query(
        r#"
        INSERT INTO doctor_buffer (user_id, buffer_minutes)
        VALUES (?, ?)
        ON CONFLICT(user_id) DO UPDATE SET buffer_minutes = excluded.buffer_minutes
        "#,
    )
    .bind(owner.to_string())
    .bind(i64::from(minutes))
    .execute(pool)
    .await
    .wrap_err("Failed to store doctor buffer")?;

    Ok(())
}
