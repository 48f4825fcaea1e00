//! # park-store — Flat Record Store
//!
//! The persistence adapter: a pure transform between the on-disk CSV
//! file and the engine's ticket rows. It never touches engine state —
//! the engine hands it record sequences at the load/export boundaries
//! and nothing in between.
//!
//! ## File Format
//!
//! One CSV row per ticket with a header row:
//!
//! ```text
//! ticket_number,space_id,vehicle_id,entry_time,exit_time,fee
//! 1,1,AB12 CDE,2026-03-01T09:00:00Z,2026-03-01T10:00:00Z,2.0
//! 2,2,XY34 FGH,2026-03-01T09:30:00Z,,
//! ```
//!
//! Empty `exit_time` and `fee` fields mean the ticket is open. A missing
//! file is an empty history (first run); saving rewrites the whole file.
//!
//! Rows that do not deserialize fail the load with the file path and row
//! position. Semantic validation (space ranges, duplicate numbers,
//! occupancy conflicts) is the engine's job during reconstruction.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
