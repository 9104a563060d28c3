mod support;

use ride_core::report::{demo_fleet, render_report};

const EXPECTED_REPORT: &str = "\
All Rides (polymorphic details):
StandardRide[R001]: Campus -> Downtown, distance=5.0 mi, fare=$8.25
PremiumRide[R002]: Airport -> Hotel, distance=12.3 mi, fare=$31.18
StandardRide[R003]: Mall -> Stadium, distance=8.7 mi, fare=$12.88

Driver[D100]: Alex Morgan, rating=4.8
  Rides completed: 3
    - StandardRide[R001]: Campus -> Downtown, distance=5.0 mi, fare=$8.25
    - PremiumRide[R002]: Airport -> Hotel, distance=12.3 mi, fare=$31.18
    - StandardRide[R003]: Mall -> Stadium, distance=8.7 mi, fare=$12.88

Rider[U200]: Taylor Kim
  Requested rides: 2
    - StandardRide[R001]: Campus -> Downtown, distance=5.0 mi, fare=$8.25
    - StandardRide[R003]: Mall -> Stadium, distance=8.7 mi, fare=$12.88
";

#[test]
fn demo_report_matches_expected_listing() {
    let fleet = demo_fleet().expect("demo fleet should build");
    let report = support::fleet::render(|out| render_report(&fleet, out));
    assert_eq!(report, EXPECTED_REPORT);
}

#[test]
fn demo_totals_follow_rounded_fares() {
    let fleet = demo_fleet().expect("demo fleet should build");
    assert_eq!(fleet.driver.total_earnings().to_string(), "$52.31");
    assert_eq!(fleet.rider.total_spend().to_string(), "$21.13");
}
