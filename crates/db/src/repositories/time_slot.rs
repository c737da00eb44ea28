use crate::DbPool;
use crate::models::{format_timestamp, parse_timestamp, DbSlotInterval, DbTimeSlot};
use eyre::{Result, WrapErr};
use medcal_core::models::{Interval, NewTimeSlot, OwnerId, SlotId, SlotStatus, SlotUpdate, TimeSlot};

pub async fn create_time_slot(pool: &DbPool, slot: &NewTimeSlot) -> Result<SlotId> {
    tracing::debug!(
        "Creating time slot: owner={}, interval={}, status={}",
        slot.owner, slot.interval, slot.status
    );

    let result = sqlx::query(
        r#"
        INSERT INTO time_slots (user_id, start_time, end_time, title, description, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(slot.owner.to_string())
    .bind(format_timestamp(slot.interval.start))
    .bind(format_timestamp(slot.interval.end))
    .bind(&slot.title)
    .bind(&slot.description)
    .bind(slot.status.as_str())
    .execute(pool)
    .await
    .wrap_err("Failed to insert time slot")?;

    Ok(result.last_insert_rowid())
}

pub async fn find_time_slot_id(
    pool: &DbPool,
    owner: OwnerId,
    interval: Interval,
) -> Result<Option<SlotId>> {
    tracing::debug!("Finding time slot: owner={}, interval={}", owner, interval);

    let id = sqlx::query_scalar::<_, SlotId>(
        r#"
        SELECT id
        FROM time_slots
        WHERE user_id = ? AND start_time = ? AND end_time = ?
        "#,
    )
    .bind(owner.to_string())
    .bind(format_timestamp(interval.start))
    .bind(format_timestamp(interval.end))
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

pub async fn get_time_slot(
    pool: &DbPool,
    owner: OwnerId,
    interval: Interval,
) -> Result<Option<TimeSlot>> {
    let row = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, user_id, start_time, end_time, title, description, status
        FROM time_slots
        WHERE user_id = ? AND start_time = ? AND end_time = ?
        "#,
    )
    .bind(owner.to_string())
    .bind(format_timestamp(interval.start))
    .bind(format_timestamp(interval.end))
    .fetch_optional(pool)
    .await?;

    row.map(TimeSlot::try_from).transpose()
}

pub async fn get_time_slots_by_user_id(pool: &DbPool, owner: OwnerId) -> Result<Vec<TimeSlot>> {
    let rows = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, user_id, start_time, end_time, title, description, status
        FROM time_slots
        WHERE user_id = ?
        ORDER BY start_time ASC
        "#,
    )
    .bind(owner.to_string())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(TimeSlot::try_from).collect()
}

/// Every interval stored for `owner`, regardless of status. Unordered.
pub async fn get_time_slot_intervals(
    pool: &DbPool,
    owner: OwnerId,
) -> Result<Vec<(SlotId, Interval)>> {
    let rows = sqlx::query_as::<_, DbSlotInterval>(
        r#"
        SELECT id, start_time, end_time
        FROM time_slots
        WHERE user_id = ?
        "#,
    )
    .bind(owner.to_string())
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| -> Result<(SlotId, Interval)> {
            let interval = Interval::new(
                parse_timestamp(&row.start_time)?,
                parse_timestamp(&row.end_time)?,
            );
            Ok((row.id, interval))
        })
        .collect()
}

/// Returns the number of rows touched; zero when no slot has that exact interval.
pub async fn set_time_slot_status(
    pool: &DbPool,
    owner: OwnerId,
    interval: Interval,
    status: SlotStatus,
) -> Result<u64> {
    tracing::debug!(
        "Setting status: owner={}, interval={}, status={}",
        owner, interval, status
    );

    let result = sqlx::query(
        r#"
        UPDATE time_slots
        SET status = ?
        WHERE user_id = ? AND start_time = ? AND end_time = ?
        "#,
    )
    .bind(status.as_str())
    .bind(owner.to_string())
    .bind(format_timestamp(interval.start))
    .bind(format_timestamp(interval.end))
    .execute(pool)
    .await
    .wrap_err("Failed to update time slot status")?;

    Ok(result.rows_affected())
}

pub async fn update_time_slot(pool: &DbPool, id: SlotId, update: &SlotUpdate) -> Result<()> {
    tracing::debug!("Updating time slot: id={}, interval={}", id, update.interval);

    sqlx::query(
        r#"
        UPDATE time_slots
        SET start_time = ?, end_time = ?, title = ?, description = ?
        WHERE id = ?
        "#,
    )
    .bind(format_timestamp(update.interval.start))
    .bind(format_timestamp(update.interval.end))
    .bind(&update.title)
    .bind(&update.description)
    .bind(id)
    .execute(pool)
    .await
    .wrap_err("Failed to update time slot")?;

    Ok(())
}
