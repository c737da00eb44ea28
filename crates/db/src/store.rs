use async_trait::async_trait;
use eyre::Result;
use medcal_core::models::{Interval, NewTimeSlot, OwnerId, SlotId, SlotStatus, SlotUpdate, TimeSlot};
use tracing::info;

use crate::repositories::{doctor_buffer, time_slot};
use crate::{create_pool, schema, DbPool};

/// Storage seen by the booking engine.
///
/// Plain CRUD over slots and buffers. Implementations never check for
/// overlaps and never validate owners beyond what the types already enforce.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Appends a slot and returns its row id.
    async fn insert_slot(&self, slot: NewTimeSlot) -> Result<SlotId>;

    /// Row id of the slot with exactly this interval.
    async fn find_by_interval(&self, owner: OwnerId, interval: Interval) -> Result<Option<SlotId>>;

    /// All stored intervals for `owner`, in no particular order.
    async fn list_intervals(&self, owner: OwnerId) -> Result<Vec<(SlotId, Interval)>>;

    /// Full records for `owner`, ordered by start.
    async fn list_slots(&self, owner: OwnerId) -> Result<Vec<TimeSlot>>;

    async fn get_slot(&self, owner: OwnerId, interval: Interval) -> Result<Option<TimeSlot>>;

    /// Sets the status of the slot with exactly this interval. Returns the
    /// number of rows changed; a miss is not an error.
    async fn set_status(&self, owner: OwnerId, interval: Interval, status: SlotStatus) -> Result<u64>;

    /// Overwrites interval, title and description of row `id`.
    async fn update_slot(&self, id: SlotId, update: SlotUpdate) -> Result<()>;

    /// Buffer in minutes, 0 when unset.
    async fn get_buffer(&self, owner: OwnerId) -> Result<u32>;

    async fn set_buffer(&self, owner: OwnerId, minutes: u32) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteSlotStore {
    pool: DbPool,
}

impl SqliteSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool for `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        info!("Connected slot store");
        Ok(Self { pool })
    }

    pub async fn init_schema(&self) -> Result<()> {
        schema::initialize_database(&self.pool).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed slot store");
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl SlotStore for SqliteSlotStore {
    async fn insert_slot(&self, slot: NewTimeSlot) -> Result<SlotId> {
        time_slot::create_time_slot(&self.pool, &slot).await
    }

    async fn find_by_interval(&self, owner: OwnerId, interval: Interval) -> Result<Option<SlotId>> {
        time_slot::find_time_slot_id(&self.pool, owner, interval).await
    }

    async fn list_intervals(&self, owner: OwnerId) -> Result<Vec<(SlotId, Interval)>> {
        time_slot::get_time_slot_intervals(&self.pool, owner).await
    }

    async fn list_slots(&self, owner: OwnerId) -> Result<Vec<TimeSlot>> {
        time_slot::get_time_slots_by_user_id(&self.pool, owner).await
    }

    async fn get_slot(&self, owner: OwnerId, interval: Interval) -> Result<Option<TimeSlot>> {
        time_slot::get_time_slot(&self.pool, owner, interval).await
    }

    async fn set_status(&self, owner: OwnerId, interval: Interval, status: SlotStatus) -> Result<u64> {
        time_slot::set_time_slot_status(&self.pool, owner, interval, status).await
    }

    async fn update_slot(&self, id: SlotId, update: SlotUpdate) -> Result<()> {
        time_slot::update_time_slot(&self.pool, id, &update).await
    }

    async fn get_buffer(&self, owner: OwnerId) -> Result<u32> {
        doctor_buffer::get_doctor_buffer(&self.pool, owner).await
    }

    async fn set_buffer(&self, owner: OwnerId, minutes: u32) -> Result<()> {
        doctor_buffer::set_doctor_buffer(&self.pool, owner, minutes).await
    }
}
