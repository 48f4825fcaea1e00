//! # park-cli — Command-Line Shell for Parkstack
//!
//! Provides the `parkctl` binary: the presentation layer over the car
//! park engine and record store. Argument parsing is separated from
//! business logic — handler modules delegate to the domain crates and
//! only format output.
//!
//! ## Subcommands
//!
//! - `parkctl enter <PLATE>` — admit a vehicle, print space and ticket.
//! - `parkctl exit <TICKET>` — settle a ticket, print the fee.
//! - `parkctl query <TICKET>` — inspect a parking record.
//! - `parkctl status` — free spaces and open ticket count.
//!
//! Every invocation loads the record history, reconstructs the engine,
//! runs one operation, and (for mutating operations) writes the full
//! record set back. Exit codes: 0 success, 1 domain rejection
//! (facility full, unknown ticket), 2 operational error.

pub mod enter;
pub mod exit;
pub mod query;
pub mod session;
pub mod status;

/// Default data file, created on first save.
pub const DEFAULT_DATA_FILE: &str = "ParkingRecords.csv";

/// Render an availability report the way every subcommand prints it.
pub fn format_availability(availability: &park_engine::Availability) -> String {
    format!(
        "Available parking spaces: {}/{}",
        availability.free, availability.capacity
    )
}
