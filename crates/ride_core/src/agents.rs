//! Drivers and riders, each holding an append-only list of shared rides.

use std::fmt;

use crate::pricing::Money;
use crate::ride::SharedRide;

fn write_ride_list(out: &mut dyn fmt::Write, heading: &str, rides: &[SharedRide]) -> fmt::Result {
    writeln!(out, "  {heading}: {}", rides.len())?;
    for ride in rides {
        out.write_str("    - ")?;
        ride.describe(out)?;
        out.write_char('\n')?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Driver {
    id: String,
    name: String,
    /// Conventionally 0–5; not enforced.
    rating: f64,
    completed_rides: Vec<SharedRide>,
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            completed_rides: Vec::new(),
        }
    }

    /// Record a completed ride. The ride is shared, not moved: other
    /// collections may hold the same ride.
    pub fn add_ride(&mut self, ride: SharedRide) {
        self.completed_rides.push(ride);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Completed rides in the order they were added.
    pub fn rides(&self) -> &[SharedRide] {
        &self.completed_rides
    }

    pub fn ride_count(&self) -> usize {
        self.completed_rides.len()
    }

    /// Sum of the cent-rounded fares of all completed rides.
    pub fn total_earnings(&self) -> Money {
        self.completed_rides.iter().map(|r| r.fare_amount()).sum()
    }

    pub fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Driver[{}]: {}, rating={:.1}", self.id, self.name, self.rating)?;
        write_ride_list(out, "Rides completed", &self.completed_rides)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

#[derive(Debug, Clone)]
pub struct Rider {
    id: String,
    name: String,
    requested_rides: Vec<SharedRide>,
}

impl Rider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            requested_rides: Vec::new(),
        }
    }

    pub fn request_ride(&mut self, ride: SharedRide) {
        self.requested_rides.push(ride);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested rides in the order they were requested.
    pub fn rides(&self) -> &[SharedRide] {
        &self.requested_rides
    }

    pub fn ride_count(&self) -> usize {
        self.requested_rides.len()
    }

    pub fn total_spend(&self) -> Money {
        self.requested_rides.iter().map(|r| r.fare_amount()).sum()
    }

    pub fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Rider[{}]: {}", self.id, self.name)?;
        write_ride_list(out, "Requested rides", &self.requested_rides)
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}
