//! # Space Registry
//!
//! Owns the fixed set of space identifiers and their occupancy status.
//! Spaces are numbered `1..=capacity`, exist for the process lifetime,
//! and only their status changes.
//!
//! ## Allocation Policy
//!
//! `allocate()` always hands out the lowest-numbered free space. The
//! policy is deterministic so that replaying the same operation sequence
//! produces the same assignments.

use std::collections::BTreeSet;

use thiserror::Error;

use park_core::{ConfigError, SpaceId};

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from space registry operations.
#[derive(Error, Debug)]
pub enum SpaceError {
    /// Every space is occupied — the facility-full condition.
    #[error("no free space available: all {capacity} spaces are occupied")]
    NoSpaceAvailable {
        /// Configured capacity.
        capacity: u32,
    },

    /// The identifier does not exist in the configured capacity range.
    #[error("unknown space {space}: valid spaces are 1..={capacity}")]
    UnknownSpace {
        /// The rejected identifier.
        space: SpaceId,
        /// Configured capacity.
        capacity: u32,
    },

    /// Release of a space that is already free.
    #[error("space {space} is not occupied")]
    NotOccupied {
        /// The offending identifier.
        space: SpaceId,
    },

    /// Occupation of a space that is already occupied.
    #[error("space {space} is already occupied")]
    AlreadyOccupied {
        /// The offending identifier.
        space: SpaceId,
    },
}

// ─── Registry ────────────────────────────────────────────────────────

/// The set of parking spaces and their occupancy status.
///
/// Stores only the occupied subset; a space is free iff it is inside the
/// capacity range and not in the occupied set, so `free + occupied ==
/// capacity` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceRegistry {
    capacity: u32,
    occupied: BTreeSet<SpaceId>,
}

impl SpaceRegistry {
    /// Create a registry with `capacity` spaces, all free.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: u32) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            occupied: BTreeSet::new(),
        })
    }

    /// A registry with the same capacity and every space free.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            capacity: self.capacity,
            occupied: BTreeSet::new(),
        }
    }

    /// Configured capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether the identifier exists in the configured capacity range.
    pub fn is_known(&self, space: SpaceId) -> bool {
        (1..=self.capacity).contains(&space.0)
    }

    /// Whether the given space is currently occupied.
    pub fn is_occupied(&self, space: SpaceId) -> bool {
        self.occupied.contains(&space)
    }

    /// Allocate the lowest-numbered free space and mark it occupied.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::NoSpaceAvailable`] when every space is
    /// occupied. The registry is unchanged on error.
    pub fn allocate(&mut self) -> Result<SpaceId, SpaceError> {
        let space = (1..=self.capacity)
            .map(SpaceId)
            .find(|s| !self.occupied.contains(s))
            .ok_or(SpaceError::NoSpaceAvailable {
                capacity: self.capacity,
            })?;
        self.occupied.insert(space);
        Ok(space)
    }

    /// Mark a specific space occupied, for reconstruction from records.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::UnknownSpace`] for identifiers outside the
    /// capacity range and [`SpaceError::AlreadyOccupied`] if the space is
    /// already held — two open tickets must never share a space.
    pub fn occupy(&mut self, space: SpaceId) -> Result<(), SpaceError> {
        self.check_known(space)?;
        if !self.occupied.insert(space) {
            return Err(SpaceError::AlreadyOccupied { space });
        }
        Ok(())
    }

    /// Mark the given space free.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::UnknownSpace`] for identifiers outside the
    /// capacity range and [`SpaceError::NotOccupied`] if the space is
    /// already free.
    pub fn release(&mut self, space: SpaceId) -> Result<(), SpaceError> {
        self.check_known(space)?;
        if !self.occupied.remove(&space) {
            return Err(SpaceError::NotOccupied { space });
        }
        Ok(())
    }

    /// Number of free spaces.
    pub fn free_count(&self) -> u32 {
        self.capacity - self.occupied.len() as u32
    }

    /// Number of occupied spaces.
    pub fn occupied_count(&self) -> u32 {
        self.occupied.len() as u32
    }

    /// All free space identifiers, ascending.
    pub fn free_spaces(&self) -> Vec<SpaceId> {
        (1..=self.capacity)
            .map(SpaceId)
            .filter(|s| !self.occupied.contains(s))
            .collect()
    }

    /// All occupied space identifiers, ascending.
    pub fn occupied_spaces(&self) -> Vec<SpaceId> {
        self.occupied.iter().copied().collect()
    }

    fn check_known(&self, space: SpaceId) -> Result<(), SpaceError> {
        if !self.is_known(space) {
            return Err(SpaceError::UnknownSpace {
                space,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
