//! Fixed-point monetary amount type.
//!
//! The portal's source data mixes integer minor units and floating decimals
//! for salary fields. Inside the engine there is exactly one representation:
//! [`Money`], an integer count of minor units (exactly two decimal digits).
//! Conversion from [`Decimal`] happens once at the boundary, rounding half
//! away from zero.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount in minor units (hundredths of the base currency unit).
///
/// `Money` is `Copy`, totally ordered, and exact: two amounts computed from
/// identical inputs compare bit-identical. Negative values are representable
/// so that intermediate arithmetic (gross minus deductions) can go below
/// zero before the caller clamps; validated inputs are never negative.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Money::from_decimal(Decimal::from_str("58.75").unwrap());
/// let pay = rate.mul_decimal(Decimal::from(80));
/// assert_eq!(pay, Money::from_major(4700));
/// assert_eq!(pay.to_string(), "4700.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a count of minor units (e.g. centavos).
    pub const fn from_minor(minor: i64) -> Money {
        Money(minor)
    }

    /// Creates an amount from whole major units.
    pub const fn from_major(major: i64) -> Money {
        Money(major * 100)
    }

    /// Converts a `Decimal` to `Money`, rounding to two decimal places
    /// half away from zero. Values beyond the representable range
    /// saturate rather than fail; no statutory figure comes anywhere
    /// near that range.
    pub fn from_decimal(value: Decimal) -> Money {
        let rounded =
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let minor = (rounded * Decimal::ONE_HUNDRED).to_i64().unwrap_or_else(|| {
            if value.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }
        });
        Money(minor)
    }

    /// Returns the amount as a count of minor units.
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns the amount as a `Decimal` with scale 2.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Multiplies by a decimal factor, rounding once at the end.
    ///
    /// Used for `rate x hours` style products where intermediate
    /// precision must be preserved until the final rounding step.
    pub fn mul_decimal(self, factor: Decimal) -> Money {
        Money::from_decimal(self.to_decimal() * factor)
    }

    /// Returns true if the amount is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the greater of two amounts.
    pub fn max(self, other: Money) -> Money {
        Money(self.0.max(other.0))
    }

    /// Returns the lesser of two amounts.
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Clamps the amount into `[floor, cap]`.
    pub fn clamp(self, floor: Money, cap: Money) -> Money {
        Money(self.0.clamp(floor.0, cap.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Scale-2 Decimal renders with exactly two decimal digits.
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Money::from_decimal(value))
    }
}
