//! Print the demo fleet as a JSON snapshot (rides, driver, rider, totals).
//!
//! Run with: cargo run -p ride_core --example ride_export

use std::process::exit;

use ride_core::report::demo_fleet;
use ride_core::telemetry_export::to_json_pretty;

fn main() {
    let snapshot = match demo_fleet() {
        Ok(fleet) => fleet.snapshot(),
        Err(err) => {
            eprintln!("failed to build demo fleet: {err}");
            exit(1);
        }
    };

    match to_json_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
