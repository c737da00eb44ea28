//! Overlap detection over half-open intervals.

use crate::models::{Interval, SlotId};

/// First existing interval that overlaps `candidate`, if any.
pub fn find_conflict<'a, I>(candidate: &Interval, existing: I) -> Option<&'a Interval>
where
    I: IntoIterator<Item = &'a Interval>,
{
    existing.into_iter().find(|other| candidate.overlaps(other))
}

/// Overlap check for a new slot under a post-appointment buffer.
///
/// Both the candidate and every existing slot keep `buffer_minutes` free after
/// their end, so a conflict is `start < existing.end + buffer` and
/// `end + buffer > existing.start`.
pub fn find_buffered_conflict<'a, I>(
    candidate: &Interval,
    existing: I,
    buffer_minutes: u32,
) -> Option<&'a Interval>
where
    I: IntoIterator<Item = &'a Interval>,
{
    let window = candidate.extend_end(buffer_minutes);
    existing
        .into_iter()
        .find(|other| window.overlaps(&other.extend_end(buffer_minutes)))
}

/// Like [`find_conflict`] over stored rows, ignoring the row `skip`.
///
/// Used when a slot is moved, so that it does not collide with its own old position.
pub fn find_conflict_excluding<'a>(
    candidate: &Interval,
    existing: &'a [(SlotId, Interval)],
    skip: SlotId,
) -> Option<&'a Interval> {
    find_conflict(
        candidate,
        existing
            .iter()
            .filter(|(id, _)| *id != skip)
            .map(|(_, interval)| interval),
    )
}
