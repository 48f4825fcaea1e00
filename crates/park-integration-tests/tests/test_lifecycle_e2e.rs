//! # Lifecycle End-to-End Tests
//!
//! Walks the reference scenario across the public engine surface:
//! capacity 2 at £2/hour, two entries filling the facility, a rejected
//! third entry, an exit billing exactly one hour, and reuse of the
//! freed space under a fresh ticket number.

use park_core::{ParkConfig, SpaceId, TicketNumber, Timestamp, VehicleId};
use park_engine::{CarPark, EngineError, LedgerError, SpaceError};

fn config(capacity: u32, hourly_rate: f64) -> ParkConfig {
    ParkConfig {
        capacity,
        hourly_rate,
    }
}

fn vehicle(plate: &str) -> VehicleId {
    VehicleId::new(plate).unwrap()
}

fn ts(secs: i64) -> Timestamp {
    Timestamp::from_epoch_secs(secs).unwrap()
}

#[test]
fn reference_scenario_capacity_two() {
    let mut park = CarPark::new(&config(2, 2.0)).unwrap();

    let first = park.enter(vehicle("AB12CDE"), ts(0)).unwrap();
    assert_eq!(first.ticket, TicketNumber(1));
    assert_eq!(first.space, SpaceId(1));

    let second = park.enter(vehicle("XY34FGH"), ts(0)).unwrap();
    assert_eq!(second.ticket, TicketNumber(2));
    assert_eq!(second.space, SpaceId(2));

    // Facility full: rejected, no state change.
    let err = park.enter(vehicle("ZZ99ZZZ"), ts(0)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Space(SpaceError::NoSpaceAvailable { .. })
    ));
    assert_eq!(park.available().free, 0);
    assert_eq!(park.open_tickets(), 2);

    // One hour exactly bills one hour.
    let exit = park.exit(TicketNumber(1), ts(3600)).unwrap();
    assert_eq!(exit.fee, 2.0);
    assert_eq!(park.available().spaces, vec![SpaceId(1)]);

    // Space 1 is reused; ticket numbers are not.
    let third = park.enter(vehicle("ZZ99ZZZ"), ts(3600)).unwrap();
    assert_eq!(third.ticket, TicketNumber(3));
    assert_eq!(third.space, SpaceId(1));
}

#[test]
fn fee_boundaries_at_the_hour() {
    let rate = 2.0;
    let mut park = CarPark::new(&config(3, rate)).unwrap();

    // Up to and including one hour: one hour's rate.
    let a = park.enter(vehicle("AA11 AAA"), ts(0)).unwrap();
    assert_eq!(park.exit(a.ticket, ts(1)).unwrap().fee, rate);

    let b = park.enter(vehicle("BB22 BBB"), ts(0)).unwrap();
    assert_eq!(park.exit(b.ticket, ts(3600)).unwrap().fee, rate);

    // One second past the hour: two hours' rate.
    let c = park.enter(vehicle("CC33 CCC"), ts(0)).unwrap();
    assert_eq!(park.exit(c.ticket, ts(3601)).unwrap().fee, 2.0 * rate);
}

#[test]
fn fee_is_monotone_in_duration() {
    let mut last = 0.0;
    for seconds in [0, 1, 1800, 3600, 3601, 7200, 10800, 86400] {
        let mut park = CarPark::new(&config(1, 2.0)).unwrap();
        let receipt = park.enter(vehicle("AB12 CDE"), ts(0)).unwrap();
        let fee = park.exit(receipt.ticket, ts(seconds)).unwrap().fee;
        assert!(fee >= last, "fee decreased between durations at {seconds}s");
        last = fee;
    }
}

#[test]
fn exit_rejections_leave_state_unchanged() {
    let mut park = CarPark::new(&config(2, 2.0)).unwrap();
    let receipt = park.enter(vehicle("AB12 CDE"), ts(0)).unwrap();
    park.exit(receipt.ticket, ts(60)).unwrap();

    let before = park.clone();

    let unknown = park.exit(TicketNumber(42), ts(120)).unwrap_err();
    assert!(matches!(
        unknown,
        EngineError::Ledger(LedgerError::UnknownTicket { .. })
    ));
    assert_eq!(park, before);

    let closed = park.exit(receipt.ticket, ts(120)).unwrap_err();
    assert!(matches!(
        closed,
        EngineError::Ledger(LedgerError::AlreadyClosed { .. })
    ));
    assert_eq!(park, before);
}

#[test]
fn numbering_resumes_after_restart() {
    let mut park = CarPark::new(&config(2, 2.0)).unwrap();
    let a = park.enter(vehicle("AB12 CDE"), ts(0)).unwrap();
    park.enter(vehicle("XY34 FGH"), ts(10)).unwrap();
    park.exit(a.ticket, ts(3600)).unwrap();

    // Simulated restart: a fresh engine fed the exported history.
    let snapshot = park.export_records();
    let mut restarted = CarPark::new(&config(2, 2.0)).unwrap();
    restarted.load_records(snapshot.records).unwrap();

    let next = restarted.enter(vehicle("ZZ99 ZZZ"), ts(4000)).unwrap();
    assert_eq!(next.ticket, TicketNumber(3));
}

#[test]
fn query_is_read_only_and_quotes_accrue() {
    let mut park = CarPark::new(&config(2, 2.0)).unwrap();
    let receipt = park.enter(vehicle("AB12 CDE"), ts(0)).unwrap();

    let before = park.clone();
    assert!(park.ticket(receipt.ticket).is_some());
    assert!(park.ticket(TicketNumber(99)).is_none());
    assert_eq!(park.quote(receipt.ticket, ts(1800)).unwrap(), 2.0);
    assert_eq!(park.quote(receipt.ticket, ts(3601)).unwrap(), 4.0);
    assert_eq!(park, before);
}
