pub mod doctor_buffer;
pub mod time_slot;
