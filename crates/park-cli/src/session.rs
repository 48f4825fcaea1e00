//! # Session Plumbing
//!
//! Shared load/operate/save flow for the subcommand handlers. A session
//! is one reconstruction of the engine from the record store; mutating
//! handlers persist the engine's exported records before returning.

use std::path::Path;

use anyhow::{Context, Result};

use park_core::ParkConfig;
use park_engine::CarPark;
use park_store::RecordStore;

/// One CLI invocation's engine and its backing store.
pub struct Session {
    /// The reconstructed car park.
    pub park: CarPark,
    store: RecordStore,
}

impl Session {
    /// Load the record history and reconstruct the engine.
    pub fn open(data_file: &Path, config: &ParkConfig) -> Result<Self> {
        let store = RecordStore::new(data_file);
        let records = store
            .load()
            .with_context(|| format!("failed to load records from {}", data_file.display()))?;

        tracing::debug!(records = records.len(), "loaded record history");

        let mut park = CarPark::new(config).context("invalid configuration")?;
        park.load_records(records)
            .context("historical records are inconsistent; refusing to start on partial state")?;

        tracing::debug!(
            open = park.open_tickets(),
            free = park.available().free,
            "reconstructed car park state"
        );

        Ok(Self { park, store })
    }

    /// Write the engine's full record set back to the store.
    pub fn persist(&self) -> Result<()> {
        let snapshot = self.park.export_records();
        self.store
            .save(&snapshot.records)
            .with_context(|| format!("failed to save records to {}", self.store.path().display()))?;
        tracing::debug!(records = snapshot.records.len(), "saved record set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use park_core::{Timestamp, VehicleId};

    use super::*;

    #[test]
    fn test_first_session_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("ParkingRecords.csv");
        let session = Session::open(&data_file, &ParkConfig::default()).unwrap();
        assert_eq!(session.park.open_tickets(), 0);
    }

    #[test]
    fn test_state_survives_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("ParkingRecords.csv");
        let config = ParkConfig::default();

        let receipt = {
            let mut session = Session::open(&data_file, &config).unwrap();
            let receipt = session
                .park
                .enter(VehicleId::new("AB12 CDE").unwrap(), Timestamp::now())
                .unwrap();
            session.persist().unwrap();
            receipt
        };

        let reopened = Session::open(&data_file, &config).unwrap();
        assert_eq!(reopened.park.open_tickets(), 1);
        let ticket = reopened.park.ticket(receipt.ticket).unwrap();
        assert!(ticket.is_open());
        assert_eq!(ticket.space, receipt.space);
    }

    #[test]
    fn test_corrupt_history_refuses_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("ParkingRecords.csv");
        // Space 9 does not exist at the default capacity of 5.
        std::fs::write(
            &data_file,
            "ticket_number,space_id,vehicle_id,entry_time,exit_time,fee\n\
             1,9,AB12 CDE,2026-03-01T09:00:00Z,,\n",
        )
        .unwrap();

        assert!(Session::open(&data_file, &ParkConfig::default()).is_err());
    }
}
