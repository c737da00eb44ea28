use async_trait::async_trait;
use medcal_core::models::{Interval, NewTimeSlot, OwnerId, SlotId, SlotStatus, SlotUpdate, TimeSlot};
use mockall::mock;

use crate::store::SlotStore;

mock! {
    pub SlotStore {}

    #[async_trait]
    impl SlotStore for SlotStore {
        async fn insert_slot(&self, slot: NewTimeSlot) -> eyre::Result<SlotId>;
        async fn find_by_interval(&self, owner: OwnerId, interval: Interval) -> eyre::Result<Option<SlotId>>;
        async fn list_intervals(&self, owner: OwnerId) -> eyre::Result<Vec<(SlotId, Interval)>>;
        async fn list_slots(&self, owner: OwnerId) -> eyre::Result<Vec<TimeSlot>>;
        async fn get_slot(&self, owner: OwnerId, interval: Interval) -> eyre::Result<Option<TimeSlot>>;
        async fn set_status(&self, owner: OwnerId, interval: Interval, status: SlotStatus) -> eyre::Result<u64>;
        async fn update_slot(&self, id: SlotId, update: SlotUpdate) -> eyre::Result<()>;
        async fn get_buffer(&self, owner: OwnerId) -> eyre::Result<u32>;
        async fn set_buffer(&self, owner: OwnerId, minutes: u32) -> eyre::Result<()>;
    }
}
