use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BookingError, BookingResult};
use crate::models::{OwnerId, SlotStatus};

/// Storage row id. Only used to target updates, never handed to callers of the engine.
pub type SlotId = i64;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Builds an interval that is safe to persist: `start` must precede `end`.
    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::InvalidInterval(format!(
                "start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Two intervals overlap iff `self.start < other.end && self.end > other.start`.
    /// Intervals that only share an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Same interval with `minutes` appended to its end. Saturates at the
    /// largest representable timestamp.
    pub fn extend_end(&self, minutes: u32) -> Self {
        let end = self
            .end
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .unwrap_or(NaiveDateTime::MAX);
        Self { start: self.start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub owner: OwnerId,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: SlotStatus,
}

impl TimeSlot {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }
}

/// A slot about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeSlot {
    pub owner: OwnerId,
    pub interval: Interval,
    pub title: String,
    pub description: String,
    pub status: SlotStatus,
}

impl From<NewTimeSlot> for TimeSlot {
    fn from(slot: NewTimeSlot) -> Self {
        Self {
            owner: slot.owner,
            start_time: slot.interval.start,
            end_time: slot.interval.end,
            title: slot.title,
            description: slot.description,
            status: slot.status,
        }
    }
}

/// Replacement values for an existing row, written in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub interval: Interval,
    pub title: String,
    pub description: String,
}

/// Caller-supplied changes for an edit.
///
/// The interval is only replaced when both `new_start` and `new_end` are set.
/// A missing `title` or `description` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEdit {
    pub new_start: Option<NaiveDateTime>,
    pub new_end: Option<NaiveDateTime>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SlotEdit {
    pub fn relocate(new_start: NaiveDateTime, new_end: NaiveDateTime) -> Self {
        Self {
            new_start: Some(new_start),
            new_end: Some(new_end),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The interval the slot ends up at.
    pub fn target_interval(&self, current: Interval) -> Interval {
        match (self.new_start, self.new_end) {
            (Some(start), Some(end)) => Interval::new(start, end),
            _ => current,
        }
    }
}
