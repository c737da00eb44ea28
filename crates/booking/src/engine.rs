//! # Booking Engine
//!
//! Validation, buffer handling and overlap detection on top of a [`SlotStore`].
//! The engine keeps no slot data of its own; every decision is made against
//! what the store returns at call time.
//!
//! ## Conflict rules
//!
//! - New slots are checked with the owner's buffer kept free after their end
//!   and after the end of every existing slot. The stored end is always the
//!   caller's end.
//! - [`BookingEngine::check_conflict`] and edits use the plain interval.
//! - Intervals are half-open, so back-to-back slots never collide.
//! - Every stored slot counts, whatever its status.

use chrono::NaiveDateTime;
use medcal_core::{
    conflict::{find_buffered_conflict, find_conflict, find_conflict_excluding},
    errors::{BookingError, BookingResult},
    models::{Interval, NewTimeSlot, OwnerId, SlotEdit, SlotStatus, SlotUpdate, TimeSlot},
};
use medcal_db::SlotStore;
use tracing::{debug, info, warn};

use crate::locks::OwnerLocks;

/// Orchestrates slot creation, cancellation and edits for every owner.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use medcal_booking::BookingEngine;
/// use medcal_core::models::SlotStatus;
/// use medcal_db::SqliteSlotStore;
///
/// # async fn example() -> eyre::Result<()> {
/// let store = SqliteSlotStore::connect("sqlite::memory:").await?;
/// store.init_schema().await?;
/// let engine = BookingEngine::new(store);
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
/// engine
///     .create_slot(
///         "5a78af51-8f88-4b8b-8b21-27334997d2b2",
///         day.and_hms_opt(10, 0, 0).unwrap(),
///         day.and_hms_opt(10, 30, 0).unwrap(),
///         "Check-up",
///         "",
///         SlotStatus::Reserved,
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BookingEngine<S> {
    store: S,
    locks: OwnerLocks,
}

impl<S: SlotStore> BookingEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: OwnerLocks::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Books `[start, end)` for `owner`.
    ///
    /// The owner's buffer only widens the conflict check; the slot is stored
    /// with the caller's `end`.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` if `owner` is not a UUID
    /// * `InvalidInterval` if `start` is not before `end`
    /// * `Conflict` if the slot comes within the buffer of any stored slot of the owner
    /// * `Storage` if the store fails
    pub async fn create_slot(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        title: &str,
        description: &str,
        status: SlotStatus,
    ) -> BookingResult<TimeSlot> {
        let owner = OwnerId::parse(owner)?;
        let interval = Interval::try_new(start, end)?;

        let _guard = self.locks.acquire(owner).await;

        let buffer = self.store.get_buffer(owner).await?;
        let existing = self.store.list_intervals(owner).await?;

        if let Some(hit) = find_buffered_conflict(&interval, existing.iter().map(|(_, i)| i), buffer) {
            warn!(%owner, %interval, buffer, existing = %hit, "Rejected overlapping slot");
            return Err(BookingError::Conflict(format!(
                "{interval} overlaps existing slot {hit} with a {buffer} minute buffer"
            )));
        }

        let slot = NewTimeSlot {
            owner,
            interval,
            title: title.to_string(),
            description: description.to_string(),
            status,
        };
        let id = self.store.insert_slot(slot.clone()).await?;

        info!(%owner, %interval, %status, id, "Created time slot");
        Ok(slot.into())
    }

    /// Convenience for blocking time: an `UNAVAILABLE` slot with no title or description.
    pub async fn add_unavailable_slot(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<TimeSlot> {
        self.create_slot(owner, start, end, "", "", SlotStatus::Unavailable)
            .await
    }

    /// Whether `[start, end)` overlaps any stored slot of `owner`. No buffer is applied.
    pub async fn check_conflict(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<bool> {
        let owner = OwnerId::parse(owner)?;
        let candidate = Interval::new(start, end);

        let existing = self.store.list_intervals(owner).await?;
        Ok(find_conflict(&candidate, existing.iter().map(|(_, i)| i)).is_some())
    }

    pub async fn set_doctor_buffer(&self, owner: &str, minutes: u32) -> BookingResult<()> {
        let owner = OwnerId::parse(owner)?;

        self.store.set_buffer(owner, minutes).await?;
        info!(%owner, minutes, "Updated doctor buffer");
        Ok(())
    }

    /// Buffer in minutes, 0 for owners that never set one.
    pub async fn get_doctor_buffer(&self, owner: &str) -> BookingResult<u32> {
        let owner = OwnerId::parse(owner)?;

        Ok(self.store.get_buffer(owner).await?)
    }

    /// Marks the slot with exactly `[start, end)` as cancelled.
    ///
    /// Prior status is not checked, and a missing slot is not an error.
    /// Serialized with [`BookingEngine::set_slot_status`] for the same owner.
    pub async fn cancel_reservation(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<()> {
        let owner = OwnerId::parse(owner)?;
        let interval = Interval::new(start, end);

        let _guard = self.locks.acquire(owner).await;

        let changed = self
            .store
            .set_status(owner, interval, SlotStatus::Cancelled)
            .await?;

        if changed == 0 {
            debug!(%owner, %interval, "No slot to cancel");
        } else {
            info!(%owner, %interval, "Cancelled reservation");
        }
        Ok(())
    }

    /// Sets the status of the slot with exactly `[start, end)` from a boundary string.
    ///
    /// A missing slot is a silent no-op, like [`BookingEngine::cancel_reservation`].
    ///
    /// # Errors
    ///
    /// * `InvalidStatus` if `status` is not one of the four status names, or if
    ///   the slot cannot move from its current status to `status`
    /// * `InvalidIdentifier` if `owner` is not a UUID
    pub async fn set_slot_status(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: &str,
    ) -> BookingResult<()> {
        let status: SlotStatus = status.parse()?;
        let owner = OwnerId::parse(owner)?;
        let interval = Interval::new(start, end);

        let _guard = self.locks.acquire(owner).await;

        let Some(current) = self.store.get_slot(owner, interval).await? else {
            debug!(%owner, %interval, %status, "No slot to update");
            return Ok(());
        };

        if !current.status.can_transition_to(status) {
            return Err(BookingError::InvalidStatus(format!(
                "slot {interval} cannot move from {} to {status}",
                current.status
            )));
        }

        self.store.set_status(owner, interval, status).await?;
        info!(%owner, %interval, from = %current.status, to = %status, "Updated slot status");
        Ok(())
    }

    /// Edits the slot with exactly `[start, end)`.
    ///
    /// The interval moves only when both `edit.new_start` and `edit.new_end`
    /// are set, and the new interval must not overlap any other slot of the
    /// owner. Missing title or description are stored as empty strings.
    /// Status is left untouched.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` if `owner` is not a UUID
    /// * `InvalidInterval` if the new interval is empty or inverted
    /// * `NotFound` if no slot has exactly `[start, end)`
    /// * `Conflict` if the new interval overlaps another slot
    pub async fn edit_reservation(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        edit: SlotEdit,
    ) -> BookingResult<()> {
        let owner = OwnerId::parse(owner)?;
        let current = Interval::new(start, end);
        let target = match edit.target_interval(current) {
            moved if moved != current => Interval::try_new(moved.start, moved.end)?,
            _ => current,
        };

        let _guard = self.locks.acquire(owner).await;

        let id = self
            .store
            .find_by_interval(owner, current)
            .await?
            .ok_or_else(|| {
                BookingError::NotFound(format!("No slot {current} for owner {owner}"))
            })?;

        if target != current {
            let existing = self.store.list_intervals(owner).await?;
            if let Some(hit) = find_conflict_excluding(&target, &existing, id) {
                warn!(%owner, from = %current, to = %target, existing = %hit, "Rejected overlapping edit");
                return Err(BookingError::Conflict(format!(
                    "{target} overlaps existing slot {hit}"
                )));
            }
        }

        let update = SlotUpdate {
            interval: target,
            title: edit.title.unwrap_or_default(),
            description: edit.description.unwrap_or_default(),
        };
        self.store.update_slot(id, update).await?;

        info!(%owner, from = %current, to = %target, "Edited reservation");
        Ok(())
    }

    /// All slots of `owner`, ordered by start.
    pub async fn list_slots(&self, owner: &str) -> BookingResult<Vec<TimeSlot>> {
        let owner = OwnerId::parse(owner)?;

        Ok(self.store.list_slots(owner).await?)
    }

    /// The slot with exactly `[start, end)`, if any.
    pub async fn find_slot(
        &self,
        owner: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Option<TimeSlot>> {
        let owner = OwnerId::parse(owner)?;

        Ok(self.store.get_slot(owner, Interval::new(start, end)).await?)
    }
}
