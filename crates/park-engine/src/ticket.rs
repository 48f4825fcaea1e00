//! # Ticket Ledger
//!
//! Owns every ticket ever issued, open and closed, keyed by ticket
//! number. Tickets transition `Open → Closed` exactly once and are never
//! deleted — closed tickets remain as historical records.
//!
//! ## Numbering
//!
//! Ticket numbers are strictly increasing across the ledger's lifetime.
//! Opening a ticket with an explicit number (reconstruction from
//! historical records) advances the counter past it, so a restarted
//! session never reuses a number.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use thiserror::Error;

use park_core::{SpaceId, TicketNumber, Timestamp, VehicleId};

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from ticket ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A ticket with this number already exists.
    #[error("duplicate ticket number {number}")]
    DuplicateTicket {
        /// The colliding number.
        number: TicketNumber,
    },

    /// No ticket with this number exists.
    #[error("no parking record found for ticket number {number}")]
    UnknownTicket {
        /// The unknown number.
        number: TicketNumber,
    },

    /// The ticket has already been closed.
    #[error("ticket {number} is already closed")]
    AlreadyClosed {
        /// The offending number.
        number: TicketNumber,
    },
}

// ─── Ticket ──────────────────────────────────────────────────────────

/// The record of one vehicle's stay, from entry to (eventually) exit.
///
/// `exited_at` and `fee` are set together by [`TicketLedger::close()`],
/// exactly once. A ticket with only one of the two populated cannot be
/// produced by the ledger and is treated as corrupt on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    /// Ticket number, unique across the ledger's lifetime.
    pub number: TicketNumber,
    /// The space this stay occupies (or occupied).
    pub space: SpaceId,
    /// The vehicle's registration plate.
    pub vehicle: VehicleId,
    /// When the vehicle entered.
    pub entered_at: Timestamp,
    /// When the vehicle exited. `None` while the ticket is open.
    pub exited_at: Option<Timestamp>,
    /// The fee charged on exit. `None` while the ticket is open.
    pub fee: Option<f64>,
}

impl Ticket {
    /// Whether the ticket is still open (vehicle currently parked).
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }
}

// ─── Ledger ──────────────────────────────────────────────────────────

/// The full set of tickets, open and closed, keyed by ticket number.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketLedger {
    tickets: BTreeMap<TicketNumber, Ticket>,
    /// The next number to hand out. Always greater than every key.
    next: u64,
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketLedger {
    /// An empty ledger, numbering from 1.
    pub fn new() -> Self {
        Self {
            tickets: BTreeMap::new(),
            next: 1,
        }
    }

    /// Reserve and return the next unused ticket number.
    pub fn allocate_number(&mut self) -> TicketNumber {
        let number = TicketNumber(self.next);
        self.next += 1;
        number
    }

    /// Open a ticket under an explicit number.
    ///
    /// Advances the numbering counter past `number`, so reconstruction
    /// from historical records seeds future allocations.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateTicket`] if the number is already
    /// present. The ledger is unchanged on error.
    pub fn open(
        &mut self,
        number: TicketNumber,
        space: SpaceId,
        vehicle: VehicleId,
        entered_at: Timestamp,
    ) -> Result<&Ticket, LedgerError> {
        match self.tickets.entry(number) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateTicket { number }),
            Entry::Vacant(slot) => {
                self.next = self.next.max(number.0.saturating_add(1));
                Ok(slot.insert(Ticket {
                    number,
                    space,
                    vehicle,
                    entered_at,
                    exited_at: None,
                    fee: None,
                }))
            }
        }
    }

    /// Close a ticket, recording exit time and fee. `Open → Closed` is
    /// the only transition; it happens exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownTicket`] or
    /// [`LedgerError::AlreadyClosed`]. The ledger is unchanged on error.
    pub fn close(
        &mut self,
        number: TicketNumber,
        exited_at: Timestamp,
        fee: f64,
    ) -> Result<&Ticket, LedgerError> {
        let ticket = self
            .tickets
            .get_mut(&number)
            .ok_or(LedgerError::UnknownTicket { number })?;
        if !ticket.is_open() {
            return Err(LedgerError::AlreadyClosed { number });
        }
        ticket.exited_at = Some(exited_at);
        ticket.fee = Some(fee);
        Ok(ticket)
    }

    /// Look up a ticket by number. Read-only.
    pub fn lookup(&self, number: TicketNumber) -> Option<&Ticket> {
        self.tickets.get(&number)
    }

    /// All tickets, open and closed, ascending by number.
    pub fn records(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Number of open tickets.
    pub fn open_count(&self) -> usize {
        self.tickets.values().filter(|t| t.is_open()).count()
    }

    /// Total number of tickets, open and closed.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the ledger holds no tickets at all.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(plate: &str) -> VehicleId {
        VehicleId::new(plate).unwrap()
    }

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    #[test]
    fn test_numbers_start_at_one_and_increase() {
        let mut ledger = TicketLedger::new();
        assert_eq!(ledger.allocate_number(), TicketNumber(1));
        assert_eq!(ledger.allocate_number(), TicketNumber(2));
        assert_eq!(ledger.allocate_number(), TicketNumber(3));
    }

    #[test]
    fn test_open_and_lookup() {
        let mut ledger = TicketLedger::new();
        let number = ledger.allocate_number();
        ledger
            .open(number, SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();

        let ticket = ledger.lookup(number).unwrap();
        assert!(ticket.is_open());
        assert_eq!(ticket.space, SpaceId(1));
        assert_eq!(ticket.vehicle.as_str(), "AB12 CDE");
        assert_eq!(ticket.exited_at, None);
        assert_eq!(ticket.fee, None);
    }

    #[test]
    fn test_open_duplicate_number_rejected() {
        let mut ledger = TicketLedger::new();
        ledger
            .open(TicketNumber(7), SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();
        let err = ledger
            .open(TicketNumber(7), SpaceId(2), vehicle("XY34 FGH"), ts(10))
            .unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateTicket { .. }));
        assert_eq!(ledger.len(), 1);
        // The original record is untouched.
        assert_eq!(ledger.lookup(TicketNumber(7)).unwrap().space, SpaceId(1));
    }

    #[test]
    fn test_open_with_explicit_number_seeds_counter() {
        let mut ledger = TicketLedger::new();
        ledger
            .open(TicketNumber(41), SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();
        ledger
            .open(TicketNumber(17), SpaceId(2), vehicle("XY34 FGH"), ts(0))
            .unwrap();
        // Next allocation is past the maximum seen, not past the last.
        assert_eq!(ledger.allocate_number(), TicketNumber(42));
    }

    #[test]
    fn test_close_sets_both_fields_once() {
        let mut ledger = TicketLedger::new();
        let number = ledger.allocate_number();
        ledger
            .open(number, SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();
        let ticket = ledger.close(number, ts(3600), 2.0).unwrap();
        assert!(!ticket.is_open());
        assert_eq!(ticket.exited_at, Some(ts(3600)));
        assert_eq!(ticket.fee, Some(2.0));
    }

    #[test]
    fn test_close_unknown_ticket() {
        let mut ledger = TicketLedger::new();
        assert!(matches!(
            ledger.close(TicketNumber(9), ts(0), 2.0),
            Err(LedgerError::UnknownTicket { .. })
        ));
    }

    #[test]
    fn test_close_twice_rejected_and_first_close_preserved() {
        let mut ledger = TicketLedger::new();
        let number = ledger.allocate_number();
        ledger
            .open(number, SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();
        ledger.close(number, ts(3600), 2.0).unwrap();

        let err = ledger.close(number, ts(7200), 4.0).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyClosed { .. }));

        let ticket = ledger.lookup(number).unwrap();
        assert_eq!(ticket.exited_at, Some(ts(3600)));
        assert_eq!(ticket.fee, Some(2.0));
    }

    #[test]
    fn test_lookup_never_mutates() {
        let mut ledger = TicketLedger::new();
        let number = ledger.allocate_number();
        ledger
            .open(number, SpaceId(1), vehicle("AB12 CDE"), ts(0))
            .unwrap();
        let before = ledger.clone();
        let _ = ledger.lookup(number);
        let _ = ledger.lookup(TicketNumber(999));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_records_ascending_by_number() {
        let mut ledger = TicketLedger::new();
        ledger
            .open(TicketNumber(5), SpaceId(1), vehicle("A1"), ts(0))
            .unwrap();
        ledger
            .open(TicketNumber(2), SpaceId(2), vehicle("B2"), ts(0))
            .unwrap();
        let numbers: Vec<_> = ledger.records().map(|t| t.number).collect();
        assert_eq!(numbers, vec![TicketNumber(2), TicketNumber(5)]);
    }

    #[test]
    fn test_open_count_tracks_closes() {
        let mut ledger = TicketLedger::new();
        let a = ledger.allocate_number();
        ledger.open(a, SpaceId(1), vehicle("A1"), ts(0)).unwrap();
        let b = ledger.allocate_number();
        ledger.open(b, SpaceId(2), vehicle("B2"), ts(0)).unwrap();
        assert_eq!(ledger.open_count(), 2);

        ledger.close(a, ts(60), 2.0).unwrap();
        assert_eq!(ledger.open_count(), 1);
        assert_eq!(ledger.len(), 2);
    }
}
