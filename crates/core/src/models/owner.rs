use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Identifier of a calendar holder.
///
/// Accepts every textual form a standard UUID parser understands (simple,
/// hyphenated, braced, URN) and always renders as lower-case hyphenated text,
/// which is also the form written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub fn parse(raw: &str) -> BookingResult<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BookingError::InvalidIdentifier(format!("{raw:?} is not a valid UUID")))
    }

    /// Pure predicate form of [`OwnerId::parse`].
    pub fn is_valid(raw: &str) -> bool {
        Uuid::parse_str(raw).is_ok()
    }
}

impl FromStr for OwnerId {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for OwnerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
