use chrono::NaiveDateTime;
use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use medcal_core::models::{OwnerId, SlotId, SlotStatus, TimeSlot};

/// ISO-8601 without offset. Fractional seconds are only written when present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .wrap_err_with(|| format!("Invalid stored timestamp: {raw}"))
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: SlotId,
    pub user_id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl TryFrom<DbTimeSlot> for TimeSlot {
    type Error = eyre::Report;

    fn try_from(row: DbTimeSlot) -> Result<Self> {
        Ok(TimeSlot {
            owner: OwnerId::parse(&row.user_id)?,
            start_time: parse_timestamp(&row.start_time)?,
            end_time: parse_timestamp(&row.end_time)?,
            title: row.title,
            description: row.description,
            status: row.status.parse::<SlotStatus>()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlotInterval {
    pub id: SlotId,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctorBuffer {
    pub user_id: String,
    pub buffer_minutes: i64,
}

impl DbDoctorBuffer {
    pub fn minutes(&self) -> Result<u32> {
        u32::try_from(self.buffer_minutes).map_err(|_| {
            eyre!(
                "Stored buffer for {} is out of range: {}",
                self.user_id,
                self.buffer_minutes
            )
        })
    }
}
