//! # Status Subcommand
//!
//! Read-only availability report: free count, free space identifiers,
//! and the number of vehicles currently parked.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use park_core::ParkConfig;
use serde_json::json;

use crate::session::Session;

/// Arguments for the `parkctl status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the status subcommand. Returns exit code 0.
pub fn run_status(args: &StatusArgs, data_file: &Path, config: &ParkConfig) -> Result<u8> {
    let session = Session::open(data_file, config)?;
    let availability = session.park.available();

    if args.json {
        let report = json!({
            "capacity": availability.capacity,
            "free": availability.free,
            "free_spaces": availability.spaces,
            "open_tickets": session.park.open_tickets(),
            "hourly_rate": session.park.hourly_rate(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!("{}", crate::format_availability(&availability));
    if availability.spaces.is_empty() {
        println!("Free spaces: none");
    } else {
        let spaces: Vec<String> = availability.spaces.iter().map(|s| s.to_string()).collect();
        println!("Free spaces: {}", spaces.join(", "));
    }
    println!("Vehicles currently parked: {}", session.park.open_tickets());
    Ok(0)
}
