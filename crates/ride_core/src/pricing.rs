//! Fare policies and cent-exact money amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Base fare applied by every built-in policy except premium.
pub const BASE_FARE: f64 = 2.00;

/// Per-mile rate of the default (unspecialized) ride.
pub const BASE_PER_MILE_RATE: f64 = 1.50;

pub const STANDARD_PER_MILE_RATE: f64 = 1.25;

pub const PREMIUM_BASE_FARE: f64 = 3.50;
pub const PREMIUM_PER_MILE_RATE: f64 = 2.25;

/// Longest accepted trip. Keeps every fare, and sums of many fares, well
/// inside `i64` cents.
pub const MAX_DISTANCE_MILES: f64 = 1_000_000.0;

/// Linear fare policy: `fare = base_fare + distance_miles * per_mile_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarePolicy {
    pub base_fare: f64,
    pub per_mile_rate: f64,
}

impl FarePolicy {
    /// Policy of a ride constructed without a specialized variant.
    pub const BASE: FarePolicy = FarePolicy::new(BASE_FARE, BASE_PER_MILE_RATE);
    pub const STANDARD: FarePolicy = FarePolicy::new(BASE_FARE, STANDARD_PER_MILE_RATE);
    pub const PREMIUM: FarePolicy = FarePolicy::new(PREMIUM_BASE_FARE, PREMIUM_PER_MILE_RATE);

    pub const fn new(base_fare: f64, per_mile_rate: f64) -> Self {
        Self {
            base_fare,
            per_mile_rate,
        }
    }

    /// Raw (unrounded) fare for a trip of `distance_miles`.
    pub fn fare_for(&self, distance_miles: f64) -> f64 {
        self.base_fare + (distance_miles * self.per_mile_rate)
    }
}

/// The three built-in policies, bundled for callers that compare them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub basic: FarePolicy,
    pub standard: FarePolicy,
    pub premium: FarePolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            basic: FarePolicy::BASE,
            standard: FarePolicy::STANDARD,
            premium: FarePolicy::PREMIUM,
        }
    }
}

/// An amount of money held as whole cents.
///
/// Conversion from a raw fare rounds half away from zero, so `31.175`
/// becomes `$31.18` regardless of how the float happens to be stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Round a raw amount to cents, half away from zero. Amounts beyond the
    /// `i64` cent range saturate.
    pub fn from_amount(amount: f64) -> Self {
        // Nudge by a few ulps so values like 31.17499999... that are meant
        // to be a half-cent tie still round outward.
        let scaled = amount * 100.0;
        let nudged = scaled + scaled.signum() * scaled.abs() * f64::EPSILON * 4.0;
        Self {
            cents: nudged.round() as i64,
        }
    }

    pub fn cents(self) -> i64 {
        self.cents
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
