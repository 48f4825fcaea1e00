//! # Enter Subcommand
//!
//! Admits a vehicle: allocates the lowest free space, issues the next
//! ticket number, and persists the new record set.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use park_core::{ParkConfig, Timestamp, VehicleId};
use park_engine::{EngineError, SpaceError};

use crate::session::Session;

/// Arguments for the `parkctl enter` subcommand.
#[derive(Args, Debug)]
pub struct EnterArgs {
    /// Vehicle registration plate (e.g. "AB12 CDE").
    #[arg(value_name = "PLATE")]
    pub plate: String,
}

/// Execute the enter subcommand.
///
/// Returns exit code: 0 on success, 1 on rejection (empty plate,
/// facility full).
pub fn run_enter(args: &EnterArgs, data_file: &Path, config: &ParkConfig) -> Result<u8> {
    let vehicle = match VehicleId::new(&args.plate) {
        Ok(vehicle) => vehicle,
        Err(e) => {
            println!("{e}");
            return Ok(1);
        }
    };

    let mut session = Session::open(data_file, config)?;

    match session.park.enter(vehicle, Timestamp::now()) {
        Ok(receipt) => {
            session.persist()?;
            tracing::info!(ticket = %receipt.ticket, space = %receipt.space, "vehicle admitted");
            println!("Vehicle parked.");
            println!("  Space:  {}", receipt.space);
            println!("  Ticket: {}", receipt.ticket);
            println!("Keep your ticket safe; it is needed to exit.");
            println!("{}", crate::format_availability(&session.park.available()));
            Ok(0)
        }
        Err(EngineError::Space(SpaceError::NoSpaceAvailable { .. })) => {
            println!("Sorry, the car park is at full capacity.");
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}
