//! The demo fleet and its console report.

use std::fmt;
use std::sync::Arc;

use crate::agents::{Driver, Rider};
use crate::error::RideError;
use crate::registry::RideRegistry;
use crate::ride::{PremiumRide, SharedRide, StandardRide};
use crate::telemetry::{DriverSnapshot, FleetSnapshot, RideSnapshot, RiderSnapshot};

/// Rides of a run plus the one driver and one rider that reference them.
#[derive(Debug)]
pub struct Fleet {
    pub registry: RideRegistry,
    pub driver: Driver,
    pub rider: Rider,
}

impl Fleet {
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            rides: self
                .registry
                .iter()
                .map(|r| RideSnapshot::capture(r.as_ref()))
                .collect(),
            driver: DriverSnapshot::capture(&self.driver),
            rider: RiderSnapshot::capture(&self.rider),
        }
    }
}

/// Three rides, all completed by driver D100; rider U200 requested the
/// first and the third.
pub fn demo_fleet() -> Result<Fleet, RideError> {
    let mut registry = RideRegistry::new();
    let rides: [SharedRide; 3] = [
        Arc::new(StandardRide::new("R001", "Campus", "Downtown", 5.0)?),
        Arc::new(PremiumRide::new("R002", "Airport", "Hotel", 12.3)?),
        Arc::new(StandardRide::new("R003", "Mall", "Stadium", 8.7)?),
    ];
    for ride in rides {
        registry.insert(ride)?;
    }

    let mut driver = Driver::new("D100", "Alex Morgan", 4.8);
    for ride in registry.iter() {
        driver.add_ride(Arc::clone(ride));
    }

    let mut rider = Rider::new("U200", "Taylor Kim");
    rider.request_ride(registry.get("R001")?);
    rider.request_ride(registry.get("R003")?);

    Ok(Fleet {
        registry,
        driver,
        rider,
    })
}

/// Write the polymorphic ride listing followed by the driver and rider
/// summaries.
pub fn render_report(fleet: &Fleet, out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "All Rides (polymorphic details):")?;
    for ride in fleet.registry.iter() {
        ride.describe(out)?;
        out.write_char('\n')?;
    }
    out.write_char('\n')?;

    fleet.driver.describe(out)?;
    out.write_char('\n')?;
    fleet.rider.describe(out)
}
