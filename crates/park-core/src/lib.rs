//! # park-core — Foundational Types for Parkstack
//!
//! Defines the type-system primitives shared by every other crate in the
//! workspace: identifier newtypes, the UTC-only `Timestamp`, the facility
//! configuration surface, and the core error types. Every other crate
//! depends on `park-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `SpaceId`, `TicketNumber`,
//!    `VehicleId` — no bare integers or strings for identifiers, so a space
//!    number cannot be passed where a ticket number is expected.
//!
//! 2. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision, so the flat record store round-trips
//!    byte-identically across sessions.
//!
//! 3. **Validated construction.** `VehicleId::new()` normalizes and rejects
//!    empty input; `ParkConfig::validate()` rejects unusable capacity and
//!    rates before any state is built on them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `park-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod config;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use config::{ParkConfig, DEFAULT_CAPACITY, DEFAULT_HOURLY_RATE};
pub use error::{ConfigError, CoreError};
pub use identity::{SpaceId, TicketNumber, VehicleId};
pub use temporal::Timestamp;
