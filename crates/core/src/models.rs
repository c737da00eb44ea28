pub mod owner;
pub mod status;
pub mod time_slot;

pub use owner::OwnerId;
pub use status::SlotStatus;
pub use time_slot::{Interval, NewTimeSlot, SlotEdit, SlotId, SlotUpdate, TimeSlot};
