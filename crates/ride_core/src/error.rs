//! Errors raised while building rides and ride catalogs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RideError {
    /// Distance was negative, NaN, infinite or above `MAX_DISTANCE_MILES`.
    #[error("ride {id}: distance must be between 0 and 1000000 miles (got {distance_miles})")]
    InvalidRide { id: String, distance_miles: f64 },
    #[error("ride id {0} is already registered")]
    DuplicateRideId(String),
    #[error("no ride registered with id {0}")]
    UnknownRide(String),
    #[error("unknown ride type '{0}' (expected Ride, StandardRide or PremiumRide)")]
    UnknownRideType(String),
}

/// Errors encountered while exporting or re-reading snapshots.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
