use ride_core::report::demo_fleet;
use ride_core::telemetry::RideSnapshot;
use ride_core::telemetry_export::{from_json, to_json_pretty};
use ride_core::Money;

#[test]
fn exported_snapshot_reads_back_unchanged() {
    let snapshot = demo_fleet().expect("demo fleet should build").snapshot();
    let json = to_json_pretty(&snapshot).expect("snapshot should serialize");
    let parsed = from_json(&json).expect("snapshot should parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn shared_rides_appear_once_per_owner() {
    let snapshot = demo_fleet().expect("demo fleet should build").snapshot();
    let ids = |rides: &[RideSnapshot]| rides.iter().map(|r| r.id.clone()).collect::<Vec<_>>();

    assert_eq!(ids(&snapshot.rides), ["R001", "R002", "R003"]);
    assert_eq!(ids(&snapshot.driver.rides), ["R001", "R002", "R003"]);
    assert_eq!(ids(&snapshot.rider.rides), ["R001", "R003"]);
    assert_eq!(snapshot.driver.rides[0], snapshot.rider.rides[0]);
}

#[test]
fn snapshot_totals_are_cent_exact() {
    let snapshot = demo_fleet().expect("demo fleet should build").snapshot();
    assert_eq!(snapshot.driver.total_earnings, Money::from_cents(5231));
    assert_eq!(snapshot.rider.total_spend, Money::from_cents(2113));
    let summed: Money = snapshot.rides.iter().map(|r| r.fare).sum();
    assert_eq!(summed, snapshot.driver.total_earnings);
}
