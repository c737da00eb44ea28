//! # MedCal Core
//!
//! Domain types shared by the storage and booking crates: owners, intervals,
//! slot statuses, the overlap rule and the error taxonomy.

pub mod conflict;
pub mod errors;
pub mod models;
