//! Read-only snapshots of rides, drivers and riders for export.

use serde::{Deserialize, Serialize};

use crate::agents::{Driver, Rider};
use crate::pricing::Money;
use crate::ride::Ride;

/// Snapshot of one ride. `fare` is already rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSnapshot {
    pub id: String,
    pub ride_type: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub fare: Money,
}

impl RideSnapshot {
    pub fn capture(ride: &dyn Ride) -> Self {
        let details = ride.details();
        Self {
            id: details.id.clone(),
            ride_type: ride.ride_type().to_string(),
            pickup: details.pickup.clone(),
            dropoff: details.dropoff.clone(),
            distance_miles: details.distance_miles,
            fare: ride.fare_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSnapshot {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub rides: Vec<RideSnapshot>,
    pub total_earnings: Money,
}

impl DriverSnapshot {
    pub fn capture(driver: &Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            name: driver.name().to_string(),
            rating: driver.rating(),
            rides: driver
                .rides()
                .iter()
                .map(|r| RideSnapshot::capture(r.as_ref()))
                .collect(),
            total_earnings: driver.total_earnings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderSnapshot {
    pub id: String,
    pub name: String,
    pub rides: Vec<RideSnapshot>,
    pub total_spend: Money,
}

impl RiderSnapshot {
    pub fn capture(rider: &Rider) -> Self {
        Self {
            id: rider.id().to_string(),
            name: rider.name().to_string(),
            rides: rider
                .rides()
                .iter()
                .map(|r| RideSnapshot::capture(r.as_ref()))
                .collect(),
            total_spend: rider.total_spend(),
        }
    }
}

/// Everything in a demo run: all rides plus each party's view of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub rides: Vec<RideSnapshot>,
    pub driver: DriverSnapshot,
    pub rider: RiderSnapshot,
}
