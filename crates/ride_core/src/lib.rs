//! Polymorphic fare computation for a small ride-sharing domain.
//!
//! Rides of different categories price themselves through the [`ride::Ride`]
//! trait and are shared (reference counted) between the drivers who completed
//! them and the riders who requested them.

pub mod agents;
pub mod error;
pub mod pricing;
pub mod registry;
pub mod report;
pub mod ride;
pub mod telemetry;
pub mod telemetry_export;

pub use agents::{Driver, Rider};
pub use error::{ExportError, RideError};
pub use pricing::{FarePolicy, Money, PricingConfig};
pub use registry::RideRegistry;
pub use ride::{BasicRide, PremiumRide, Ride, RideDetails, RideKind, SharedRide, StandardRide};
