//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the facility:
//! parking spaces, tickets, and vehicles. These prevent accidental
//! identifier confusion — you cannot release a ticket number as if it
//! were a space number.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of one physical parking space.
///
/// Spaces are numbered `1..=capacity` and exist for the process lifetime;
/// only their occupancy status changes. The ordering is meaningful: the
/// allocation policy hands out the lowest-numbered free space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SpaceId(pub u32);

/// Identifier of one parking ticket.
///
/// Ticket numbers are assigned monotonically by the ledger and are never
/// reused, including across restarts — the ledger reseeds its counter
/// from historical records on load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TicketNumber(pub u64);

/// A vehicle registration plate.
///
/// Free-form, but normalized at construction: surrounding whitespace is
/// trimmed and letters are uppercased, so `" ab12 cde "` and `"AB12 CDE"`
/// name the same vehicle in the record set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(String);

impl SpaceId {
    /// Access the space number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TicketNumber {
    /// Access the ticket number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl VehicleId {
    /// Create a vehicle identifier from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyVehicleId`] if the input is empty or
    /// whitespace-only.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoreError> {
        let normalized = raw.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoreError::EmptyVehicleId);
        }
        Ok(Self(normalized))
    }

    /// Access the normalized plate string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
