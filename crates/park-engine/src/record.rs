//! # Record Schema
//!
//! The flat row schema exchanged with the persistence layer: one row per
//! ticket, historical and current. An open ticket serializes with empty
//! `exit_time` and `fee` fields; a closed ticket has both populated.
//! The persistence layer only ever sees these rows — it holds no live
//! references into engine state.

use serde::{Deserialize, Serialize};

use park_core::{SpaceId, TicketNumber, Timestamp, VehicleId};

use crate::ticket::Ticket;

/// One persisted ticket row.
///
/// Field order matches the on-disk column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Ticket number, the primary key.
    pub ticket_number: TicketNumber,
    /// Occupied (or formerly occupied) space. Must exist in the
    /// configured capacity range.
    pub space_id: SpaceId,
    /// Vehicle registration plate.
    pub vehicle_id: VehicleId,
    /// Entry timestamp.
    pub entry_time: Timestamp,
    /// Exit timestamp. Empty ⇔ ticket open.
    pub exit_time: Option<Timestamp>,
    /// Fee charged on exit. Empty ⇔ ticket open.
    pub fee: Option<f64>,
}

impl From<&Ticket> for TicketRecord {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket_number: ticket.number,
            space_id: ticket.space,
            vehicle_id: ticket.vehicle.clone(),
            entry_time: ticket.entered_at,
            exit_time: ticket.exited_at,
            fee: ticket.fee,
        }
    }
}

/// A point-in-time export of the whole facility: every ticket row plus
/// the currently occupied spaces, suitable for durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// One row per ticket, open and closed, ascending by number.
    pub records: Vec<TicketRecord>,
    /// Spaces occupied at export time, ascending.
    pub occupied_spaces: Vec<SpaceId>,
}
