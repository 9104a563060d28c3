//! Build the demo fleet (three rides, one driver, one rider) and print the
//! polymorphic ride listing followed by each party's summary.
//!
//! Run with: cargo run -p ride_core --example ride_report

use std::process::exit;

use ride_core::report::{demo_fleet, render_report};

fn main() {
    let fleet = match demo_fleet() {
        Ok(fleet) => fleet,
        Err(err) => {
            eprintln!("failed to build demo fleet: {err}");
            exit(1);
        }
    };

    let mut out = String::new();
    if let Err(err) = render_report(&fleet, &mut out) {
        eprintln!("failed to render report: {err}");
        exit(1);
    }
    print!("{out}");
}
