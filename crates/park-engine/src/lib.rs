//! # park-engine — Space & Ticket Lifecycle Engine
//!
//! The in-memory model of a fixed-capacity parking facility: which spaces
//! are occupied, which tickets are open, what an exit costs, and the
//! snapshot contract that keeps persisted records consistent with
//! in-memory state.
//!
//! ## Components
//!
//! - **SpaceRegistry** (`space.rs`): the fixed set of space identifiers
//!   and their occupancy status. Deterministic lowest-number-first
//!   allocation.
//!
//! - **TicketLedger** (`ticket.rs`): every ticket ever issued, open and
//!   closed, keyed by ticket number. Numbers are monotonic and never
//!   reused, including across restarts.
//!
//! - **FeeSchedule** (`fee.rs`): duration → fee. Any partial hour is
//!   billed as a full hour.
//!
//! - **CarPark** (`engine.rs`): composes the three into the operations
//!   callers invoke — `enter`, `exit`, `ticket`, `quote`, `available`,
//!   `load_records`, `export_records`. The only component with mutable
//!   access to the registry and ledger.
//!
//! - **Records** (`record.rs`): the flat row schema exchanged with the
//!   persistence layer. One row per ticket; an open ticket has empty
//!   exit time and fee.
//!
//! ## Invariants
//!
//! - At most one open ticket references any space at a time.
//! - A space is occupied iff exactly one open ticket references it.
//! - Ticket numbers are globally unique across open and closed tickets.
//! - A closed ticket has exit time ≥ entry time and fee ≥ 0.
//! - `occupied + free == capacity` after every operation.
//!
//! Operations that fail leave observable state unchanged; the single
//! exception is a release failure after a ticket close, which surfaces
//! [`EngineError::Consistency`] and must be treated as fatal.
//!
//! ## Concurrency
//!
//! Single-threaded, request/response. Each operation runs to completion
//! before the next; nothing blocks on I/O — persistence happens only at
//! the `load_records`/`export_records` boundaries. A future multi-client
//! front end must wrap the whole `CarPark` in one mutual-exclusion scope
//! per operation, since `enter`/`exit` each read-then-write across two
//! components.

pub mod engine;
pub mod fee;
pub mod record;
pub mod space;
pub mod ticket;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use engine::{Availability, CarPark, EngineError, EntryReceipt, ExitReceipt};

// ─── Component re-exports ───────────────────────────────────────────

pub use fee::{FeeError, FeeSchedule};
pub use space::{SpaceError, SpaceRegistry};
pub use ticket::{LedgerError, Ticket, TicketLedger};

// ─── Record re-exports ──────────────────────────────────────────────

pub use record::{Snapshot, TicketRecord};
