use std::sync::Arc;

use ride_core::{Driver, RideKind, RideRegistry, Rider, SharedRide};

/// Build a shared ride with placeholder locations.
pub fn shared_ride(kind: RideKind, id: &str, distance_miles: f64) -> SharedRide {
    kind.create(id, "Origin", "Destination", distance_miles)
        .expect("test ride should be valid")
}

/// Registry holding one ride of every built-in category, ids `K0..K2`.
pub fn registry_with_every_kind(distance_miles: f64) -> RideRegistry {
    let mut registry = RideRegistry::new();
    for (i, kind) in RideKind::ALL.into_iter().enumerate() {
        registry
            .insert(shared_ride(kind, &format!("K{i}"), distance_miles))
            .expect("ids should be unique");
    }
    registry
}

/// Driver assigned every ride of the registry, in registry order.
pub fn driver_with_all(registry: &RideRegistry) -> Driver {
    let mut driver = Driver::new("D1", "Test Driver", 4.5);
    for ride in registry.iter() {
        driver.add_ride(Arc::clone(ride));
    }
    driver
}

/// Rider requesting the given registry ids, in order.
pub fn rider_requesting(registry: &RideRegistry, ids: &[&str]) -> Rider {
    let mut rider = Rider::new("U1", "Test Rider");
    for id in ids {
        rider.request_ride(registry.get(id).expect("id should be registered"));
    }
    rider
}

pub fn render(describe: impl FnOnce(&mut String) -> std::fmt::Result) -> String {
    let mut out = String::new();
    describe(&mut out).expect("writing to a String cannot fail");
    out
}
