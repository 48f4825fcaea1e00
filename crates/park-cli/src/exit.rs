//! # Exit Subcommand
//!
//! Settles a ticket: computes the fee, closes the ticket, frees the
//! space, and persists the new record set.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use park_core::{ParkConfig, TicketNumber, Timestamp};
use park_engine::{EngineError, LedgerError};

use crate::session::Session;

/// Arguments for the `parkctl exit` subcommand.
#[derive(Args, Debug)]
pub struct ExitArgs {
    /// Ticket number issued on entry.
    #[arg(value_name = "TICKET")]
    pub ticket: u64,
}

/// Execute the exit subcommand.
///
/// Returns exit code: 0 on success, 1 on rejection (unknown or already
/// settled ticket).
pub fn run_exit(args: &ExitArgs, data_file: &Path, config: &ParkConfig) -> Result<u8> {
    let mut session = Session::open(data_file, config)?;

    match session.park.exit(TicketNumber(args.ticket), Timestamp::now()) {
        Ok(receipt) => {
            session.persist()?;
            tracing::info!(
                ticket = %receipt.ticket,
                space = %receipt.space,
                fee = receipt.fee,
                "vehicle exited"
            );
            println!("Vehicle {} exited the car park.", receipt.vehicle);
            println!("  Space:   {}", receipt.space);
            println!("  Entered: {}", receipt.entered_at);
            println!("  Exited:  {}", receipt.exited_at);
            println!("  Fee:     £{:.2}", receipt.fee);
            println!("{}", crate::format_availability(&session.park.available()));
            Ok(0)
        }
        Err(
            e @ EngineError::Ledger(
                LedgerError::UnknownTicket { .. } | LedgerError::AlreadyClosed { .. },
            ),
        ) => {
            println!("{e}");
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}
