//! Catalog of the rides created during a run.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RideError;
use crate::ride::SharedRide;

/// Holds every ride of a run, keyed by id, in insertion order.
///
/// Ride ids must be unique within a registry; drivers and riders take
/// their shared references from here.
#[derive(Debug, Default)]
pub struct RideRegistry {
    rides: Vec<SharedRide>,
    index_by_id: HashMap<String, usize>,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ride and hand back a shared reference to it.
    pub fn insert(&mut self, ride: SharedRide) -> Result<SharedRide, RideError> {
        let id = ride.id().to_string();
        if self.contains(&id) {
            return Err(RideError::DuplicateRideId(id));
        }
        self.index_by_id.insert(id, self.rides.len());
        self.rides.push(Arc::clone(&ride));
        Ok(ride)
    }

    pub fn get(&self, id: &str) -> Result<SharedRide, RideError> {
        self.index_by_id
            .get(id)
            .map(|&index| Arc::clone(&self.rides[index]))
            .ok_or_else(|| RideError::UnknownRide(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedRide> {
        self.rides.iter()
    }

    pub fn rides(&self) -> &[SharedRide] {
        &self.rides
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
