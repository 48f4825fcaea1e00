//! # Car Park Engine
//!
//! Composes the space registry, ticket ledger, and fee schedule into the
//! operations callers invoke. The engine exclusively owns both
//! registries; the presentation shell and persistence layer only ever
//! see receipts, ticket snapshots, and record rows.
//!
//! ## Ticket State Machine
//!
//! ```text
//! enter() ──▶ Open ──exit()──▶ Closed (terminal)
//! ```
//!
//! No other transitions exist: a ticket is never reopened, reassigned,
//! or deleted.
//!
//! ## Failure Atomicity
//!
//! Every operation either completes or leaves observable state
//! unchanged. `exit()` performs lookup → fee → close → release as one
//! logical unit; if the release fails after the ticket is closed, the
//! engine surfaces [`EngineError::Consistency`], which callers must
//! treat as fatal rather than retry. `load_records()` reconstructs into
//! fresh registries and commits only if every record is clean — a
//! corrupt record aborts the whole load.

use thiserror::Error;

use park_core::{ConfigError, ParkConfig, SpaceId, TicketNumber, Timestamp, VehicleId};

use crate::fee::{FeeError, FeeSchedule};
use crate::record::{Snapshot, TicketRecord};
use crate::space::{SpaceError, SpaceRegistry};
use crate::ticket::{LedgerError, Ticket, TicketLedger};

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from car park operations.
///
/// Registry, ledger, and fee errors pass through unchanged so the shell
/// can render their messages directly; `CorruptRecord` and `Consistency`
/// originate here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Space registry rejection (facility full, unknown space).
    #[error(transparent)]
    Space(#[from] SpaceError),

    /// Ticket ledger rejection (unknown, duplicate, already closed).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Fee computation rejection.
    #[error(transparent)]
    Fee(#[from] FeeError),

    /// A persisted record cannot be reconstructed. The load is aborted;
    /// no partial state is applied.
    #[error("corrupt record for ticket {ticket}: {detail}")]
    CorruptRecord {
        /// The offending record's ticket number.
        ticket: TicketNumber,
        /// What was wrong with it.
        detail: String,
    },

    /// The registry and ledger have diverged. Fatal — the process must
    /// not continue serving requests.
    #[error("car park state diverged: {detail}")]
    Consistency {
        /// Description of the divergence.
        detail: String,
    },
}

// ─── Receipts ────────────────────────────────────────────────────────

/// What the driver takes away from `enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryReceipt {
    /// The issued ticket number.
    pub ticket: TicketNumber,
    /// The assigned space.
    pub space: SpaceId,
}

/// What the driver settles on `exit`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitReceipt {
    /// The closed ticket number.
    pub ticket: TicketNumber,
    /// The vehicle that exited.
    pub vehicle: VehicleId,
    /// The space that was freed.
    pub space: SpaceId,
    /// When the vehicle entered.
    pub entered_at: Timestamp,
    /// When the vehicle exited (clamped to the entry time on clock skew).
    pub exited_at: Timestamp,
    /// The fee charged.
    pub fee: f64,
}

/// Availability report: free count and the free space list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Number of free spaces.
    pub free: u32,
    /// Configured capacity.
    pub capacity: u32,
    /// Free space identifiers, ascending.
    pub spaces: Vec<SpaceId>,
}

// ─── Engine ──────────────────────────────────────────────────────────

/// The car park: spaces, tickets, and pricing behind one operation
/// surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPark {
    spaces: SpaceRegistry,
    tickets: TicketLedger,
    fees: FeeSchedule,
}

impl CarPark {
    /// Create an empty car park from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for zero capacity or a negative rate.
    pub fn new(config: &ParkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            spaces: SpaceRegistry::new(config.capacity)?,
            tickets: TicketLedger::new(),
            fees: FeeSchedule::new(config.hourly_rate)?,
        })
    }

    /// Admit a vehicle: allocate the lowest free space and issue the next
    /// ticket number.
    ///
    /// # Errors
    ///
    /// Propagates [`SpaceError::NoSpaceAvailable`] unchanged when the
    /// facility is full; state is untouched on error.
    pub fn enter(
        &mut self,
        vehicle: VehicleId,
        entered_at: Timestamp,
    ) -> Result<EntryReceipt, EngineError> {
        let space = self.spaces.allocate()?;
        let number = self.tickets.allocate_number();
        // A freshly allocated number cannot collide; if it does, the
        // counter invariant is broken and the engine must stop.
        self.tickets
            .open(number, space, vehicle, entered_at)
            .map_err(|e| EngineError::Consistency {
                detail: format!("freshly allocated ticket number {number} rejected: {e}"),
            })?;
        Ok(EntryReceipt {
            ticket: number,
            space,
        })
    }

    /// Settle a ticket: compute the fee, close the ticket, free the
    /// space. One logical unit.
    ///
    /// An exit stamped before the recorded entry is clamped to the entry
    /// time and bills as a zero-duration stay (clock skew).
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownTicket`] / [`LedgerError::AlreadyClosed`]
    /// leave state unchanged. [`EngineError::Consistency`] means the
    /// ticket closed but the space could not be freed — fatal.
    pub fn exit(
        &mut self,
        number: TicketNumber,
        exited_at: Timestamp,
    ) -> Result<ExitReceipt, EngineError> {
        let ticket = self
            .tickets
            .lookup(number)
            .ok_or(LedgerError::UnknownTicket { number })?;
        if !ticket.is_open() {
            return Err(LedgerError::AlreadyClosed { number }.into());
        }
        let entered_at = ticket.entered_at;
        let space = ticket.space;
        let vehicle = ticket.vehicle.clone();

        let exited_at = exited_at.max(entered_at);
        let fee = self.fees.compute(entered_at, exited_at)?;

        self.tickets.close(number, exited_at, fee)?;
        self.spaces
            .release(space)
            .map_err(|e| EngineError::Consistency {
                detail: format!("ticket {number} closed but space {space} was not freed: {e}"),
            })?;

        Ok(ExitReceipt {
            ticket: number,
            vehicle,
            space,
            entered_at,
            exited_at,
            fee,
        })
    }

    /// Look up a ticket by number. Read-only.
    pub fn ticket(&self, number: TicketNumber) -> Option<&Ticket> {
        self.tickets.lookup(number)
    }

    /// The fee a ticket would settle at.
    ///
    /// A closed ticket quotes its recorded fee; an open ticket quotes the
    /// charge accrued up to `as_of`. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownTicket`] if no such ticket exists.
    pub fn quote(&self, number: TicketNumber, as_of: Timestamp) -> Result<f64, EngineError> {
        let ticket = self
            .tickets
            .lookup(number)
            .ok_or(LedgerError::UnknownTicket { number })?;
        match ticket.fee {
            Some(fee) => Ok(fee),
            None => {
                let as_of = as_of.max(ticket.entered_at);
                Ok(self.fees.compute(ticket.entered_at, as_of)?)
            }
        }
    }

    /// Current availability: free count and free space identifiers.
    pub fn available(&self) -> Availability {
        Availability {
            free: self.spaces.free_count(),
            capacity: self.spaces.capacity(),
            spaces: self.spaces.free_spaces(),
        }
    }

    /// Configured capacity.
    pub fn capacity(&self) -> u32 {
        self.spaces.capacity()
    }

    /// Number of currently open tickets.
    pub fn open_tickets(&self) -> usize {
        self.tickets.open_count()
    }

    /// The configured hourly rate.
    pub fn hourly_rate(&self) -> f64 {
        self.fees.hourly_rate()
    }

    /// Reconstruct registry and ledger from historical records.
    ///
    /// Rebuilds into fresh components and swaps them in only if every
    /// record is clean, so an abort leaves the current state intact.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CorruptRecord`] naming the first offending
    /// record: space outside the capacity range, duplicate ticket number,
    /// two open tickets on one space, half-populated exit fields, exit
    /// before entry, negative fee, or an empty vehicle id.
    pub fn load_records<I>(&mut self, records: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = TicketRecord>,
    {
        let mut spaces = self.spaces.cleared();
        let mut tickets = TicketLedger::new();

        for record in records {
            let number = record.ticket_number;

            if record.vehicle_id.as_str().trim().is_empty() {
                return Err(corrupt(number, "vehicle id is empty"));
            }
            if !spaces.is_known(record.space_id) {
                return Err(corrupt(
                    number,
                    format!(
                        "space {} is outside the capacity range 1..={}",
                        record.space_id,
                        spaces.capacity()
                    ),
                ));
            }

            match (record.exit_time, record.fee) {
                // Open ticket: occupies its space.
                (None, None) => {
                    spaces
                        .occupy(record.space_id)
                        .map_err(|e| corrupt(number, e.to_string()))?;
                    tickets
                        .open(number, record.space_id, record.vehicle_id, record.entry_time)
                        .map_err(|e| corrupt(number, e.to_string()))?;
                }
                // Closed ticket: historical only, leaves its space free.
                (Some(exit_time), Some(fee)) => {
                    if exit_time < record.entry_time {
                        return Err(corrupt(
                            number,
                            format!(
                                "exit time {exit_time} precedes entry time {}",
                                record.entry_time
                            ),
                        ));
                    }
                    if !(fee >= 0.0) {
                        return Err(corrupt(number, format!("fee {fee} is negative")));
                    }
                    tickets
                        .open(number, record.space_id, record.vehicle_id, record.entry_time)
                        .map_err(|e| corrupt(number, e.to_string()))?;
                    tickets
                        .close(number, exit_time, fee)
                        .map_err(|e| corrupt(number, e.to_string()))?;
                }
                _ => {
                    return Err(corrupt(
                        number,
                        "exit time and fee must be both present or both absent",
                    ));
                }
            }
        }

        self.spaces = spaces;
        self.tickets = tickets;
        Ok(())
    }

    /// Export every ticket row plus current space statuses.
    pub fn export_records(&self) -> Snapshot {
        Snapshot {
            records: self.tickets.records().map(TicketRecord::from).collect(),
            occupied_spaces: self.spaces.occupied_spaces(),
        }
    }
}

fn corrupt(ticket: TicketNumber, detail: impl Into<String>) -> EngineError {
    EngineError::CorruptRecord {
        ticket,
        detail: detail.into(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
