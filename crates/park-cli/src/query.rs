//! # Query Subcommand
//!
//! Read-only inspection of a parking record by ticket number. An open
//! ticket also quotes the charge accrued so far; a closed ticket shows
//! its settled fee.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use park_core::{ParkConfig, TicketNumber, Timestamp};
use serde_json::json;

use crate::session::Session;

/// Arguments for the `parkctl query` subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Ticket number to look up.
    #[arg(value_name = "TICKET")]
    pub ticket: u64,

    /// Emit the record as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the query subcommand.
///
/// Returns exit code: 0 if the record was found, 1 otherwise.
pub fn run_query(args: &QueryArgs, data_file: &Path, config: &ParkConfig) -> Result<u8> {
    let session = Session::open(data_file, config)?;
    let number = TicketNumber(args.ticket);

    let Some(ticket) = session.park.ticket(number) else {
        println!("No parking record found for ticket number {number}.");
        return Ok(1);
    };

    let quote = session.park.quote(number, Timestamp::now())?;

    if args.json {
        let record = json!({
            "ticket_number": ticket.number,
            "space_id": ticket.space,
            "vehicle_id": ticket.vehicle,
            "entry_time": ticket.entered_at,
            "exit_time": ticket.exited_at,
            "fee": ticket.fee,
            "open": ticket.is_open(),
            "quoted_fee": quote,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(0);
    }

    println!("Parking record found:");
    println!("  Ticket:  {}", ticket.number);
    println!("  Vehicle: {}", ticket.vehicle);
    println!("  Entered: {}", ticket.entered_at);
    if let (Some(exited_at), Some(fee)) = (ticket.exited_at, ticket.fee) {
        println!("  Exited:  {exited_at}");
        println!("  Fee:     £{fee:.2}");
    } else {
        println!("  Currently parked in space {}", ticket.space);
        println!("  Charge accrued so far: £{quote:.2}");
    }
    Ok(0)
}
