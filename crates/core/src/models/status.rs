use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BookingError;

/// Lifecycle state of a time slot.
///
/// `AVAILABLE -> {RESERVED, UNAVAILABLE} -> CANCELLED`. Nothing leaves
/// `CANCELLED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    #[default]
    Available,
    Unavailable,
    Reserved,
    Cancelled,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 4] = [
        SlotStatus::Available,
        SlotStatus::Unavailable,
        SlotStatus::Reserved,
        SlotStatus::Cancelled,
    ];

    /// Boundary string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Unavailable => "UNAVAILABLE",
            SlotStatus::Reserved => "RESERVED",
            SlotStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether a slot in this status may be moved to `next`.
    ///
    /// Re-applying the current status is always allowed, and every status may
    /// be cancelled.
    pub fn can_transition_to(&self, next: SlotStatus) -> bool {
        use SlotStatus::*;

        match (self, next) {
            (current, next) if *current == next => true,
            (_, Cancelled) => true,
            (Available, Reserved | Unavailable) => true,
            _ => false,
        }
    }
}

impl FromStr for SlotStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                BookingError::InvalidStatus(format!(
                    "{s:?} must be one of AVAILABLE, UNAVAILABLE, RESERVED or CANCELLED"
                ))
            })
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
