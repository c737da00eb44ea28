//! # MedCal Booking
//!
//! The booking crate holds the logic that keeps doctor calendars consistent:
//! owner validation, post-appointment buffers, overlap detection and the slot
//! status lifecycle. Storage is injected through [`medcal_db::SlotStore`].
//!
//! ## Architecture
//!
//! - **Engine**: create, cancel, edit and query operations
//! - **Config**: environment configuration for tools built on the engine
//!
//! Every engine call validates its input before the store is touched, and no
//! call is retried.

/// Configuration module for database and logging settings
pub mod config;
/// Booking operations over a slot store
pub mod engine;

mod locks;

pub use engine::BookingEngine;

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber at `level`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
