//! Rides and their per-category fare policies.
//!
//! Callers work with rides only through the [`Ride`] trait; the concrete
//! category is resolved by dynamic dispatch. Rides are immutable once built
//! and are shared between drivers and riders as [`SharedRide`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::RideError;
use crate::pricing::{FarePolicy, Money, MAX_DISTANCE_MILES};

/// A ride jointly owned by every driver/rider collection that references it.
pub type SharedRide = Arc<dyn Ride>;

/// Identifying fields of a single trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RideDetails {
    pub id: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
}

impl RideDetails {
    /// Build ride details, rejecting distances that are negative, not finite
    /// or longer than [`MAX_DISTANCE_MILES`].
    pub fn new(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self, RideError> {
        let id = id.into();
        if !(0.0..=MAX_DISTANCE_MILES).contains(&distance_miles) {
            return Err(RideError::InvalidRide { id, distance_miles });
        }
        Ok(Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
        })
    }
}

/// Capability set shared by every ride category.
///
/// New categories implement this trait with their own pricing; nothing that
/// stores or prints rides needs to change.
pub trait Ride: fmt::Debug + Send + Sync {
    fn details(&self) -> &RideDetails;

    /// Fixed label identifying the category.
    fn ride_type(&self) -> &'static str;

    /// Raw fare for this ride. Defaults to the base policy
    /// (`$2.00 + $1.50/mi`); categories override it.
    fn fare(&self) -> f64 {
        RideKind::Basic.policy().fare_for(self.details().distance_miles)
    }

    /// Write the one-line summary of this ride (no trailing newline):
    ///
    /// `<Type>[<id>]: <pickup> -> <dropoff>, distance=<d.d> mi, fare=$<d.dd>`
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let details = self.details();
        write!(
            out,
            "{}[{}]: {} -> {}, distance={:.1} mi, fare={}",
            self.ride_type(),
            details.id,
            details.pickup,
            details.dropoff,
            details.distance_miles,
            Money::from_amount(self.fare()),
        )
    }

    fn id(&self) -> &str {
        &self.details().id
    }

    /// Fare rounded to cents, half away from zero.
    fn fare_amount(&self) -> Money {
        Money::from_amount(self.fare())
    }
}

impl fmt::Display for dyn Ride + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

/// A ride without a specialized category; priced with the base policy.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicRide {
    details: RideDetails,
}

impl BasicRide {
    pub fn new(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self, RideError> {
        RideDetails::new(id, pickup, dropoff, distance_miles).map(Self::from_details)
    }

    pub fn from_details(details: RideDetails) -> Self {
        Self { details }
    }
}

impl Ride for BasicRide {
    fn details(&self) -> &RideDetails {
        &self.details
    }

    fn ride_type(&self) -> &'static str {
        RideKind::Basic.label()
    }
}

/// Standard category: `$2.00 + $1.25/mi`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardRide {
    details: RideDetails,
}

impl StandardRide {
    pub fn new(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self, RideError> {
        RideDetails::new(id, pickup, dropoff, distance_miles).map(Self::from_details)
    }

    pub fn from_details(details: RideDetails) -> Self {
        Self { details }
    }
}

impl Ride for StandardRide {
    fn details(&self) -> &RideDetails {
        &self.details
    }

    fn ride_type(&self) -> &'static str {
        RideKind::Standard.label()
    }

    fn fare(&self) -> f64 {
        RideKind::Standard.policy().fare_for(self.details.distance_miles)
    }
}

/// Premium category: `$3.50 + $2.25/mi`.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumRide {
    details: RideDetails,
}

impl PremiumRide {
    pub fn new(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self, RideError> {
        RideDetails::new(id, pickup, dropoff, distance_miles).map(Self::from_details)
    }

    pub fn from_details(details: RideDetails) -> Self {
        Self { details }
    }
}

impl Ride for PremiumRide {
    fn details(&self) -> &RideDetails {
        &self.details
    }

    fn ride_type(&self) -> &'static str {
        RideKind::Premium.label()
    }

    fn fare(&self) -> f64 {
        RideKind::Premium.policy().fare_for(self.details.distance_miles)
    }
}

/// Built-in ride categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideKind {
    Basic,
    Standard,
    Premium,
}

impl RideKind {
    pub const ALL: [RideKind; 3] = [RideKind::Basic, RideKind::Standard, RideKind::Premium];

    pub fn label(self) -> &'static str {
        match self {
            RideKind::Basic => "Ride",
            RideKind::Standard => "StandardRide",
            RideKind::Premium => "PremiumRide",
        }
    }

    pub fn policy(self) -> FarePolicy {
        match self {
            RideKind::Basic => FarePolicy::BASE,
            RideKind::Standard => FarePolicy::STANDARD,
            RideKind::Premium => FarePolicy::PREMIUM,
        }
    }

    /// Build a shared ride of this category.
    pub fn build(self, details: RideDetails) -> SharedRide {
        match self {
            RideKind::Basic => Arc::new(BasicRide::from_details(details)),
            RideKind::Standard => Arc::new(StandardRide::from_details(details)),
            RideKind::Premium => Arc::new(PremiumRide::from_details(details)),
        }
    }

    /// Validate the fields and build a shared ride of this category.
    pub fn create(
        self,
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<SharedRide, RideError> {
        RideDetails::new(id, pickup, dropoff, distance_miles).map(|details| self.build(details))
    }
}

impl fmt::Display for RideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RideKind {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RideKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| RideError::UnknownRideType(s.to_string()))
    }
}
