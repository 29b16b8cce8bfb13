//! Money type
//!
//! Domain primitive for monetary amounts in an event's single implicit currency.
//! Arithmetic rounds to two decimal places after every step, so sums of many
//! small amounts never drift away from what a person would compute by hand.
//!
//! Each step is carried out in binary floating point and rounded with
//! `round(x * 100) / 100`, the rule the stored figures were produced with, so
//! cent results (midpoints included) agree with that reference exactly.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of decimal places kept after every accumulation step
const SCALE: u32 = 2;

/// Largest integer mantissa an `f64` holds exactly (2^53)
const EXACT_F64_MANTISSA: u128 = 1 << 53;

/// Largest power of ten an `f64` holds exactly
const EXACT_F64_SCALE: u32 = 22;

/// Money represents a signed monetary value with cent precision semantics.
///
/// # Invariants
/// - `Add`, `Sub`, `round` and `split` results have exactly 2 decimal places
/// - Results saturate at about +/-9.2e16 instead of overflowing; no operation panics
/// - Values built with `Money::new` are kept verbatim until they take part
///   in an operation
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use splitty::domain::Money;
///
/// let total = Money::new(Decimal::new(100, 0));
/// assert_eq!(total.split(3), Money::new(Decimal::new(3333, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Dead zone below which a balance or remaining amount counts as settled (0.02).
    pub const TOLERANCE: Self = Money(Decimal::from_parts(2, 0, 0, false, 2));

    /// Largest payment or declared total accepted for storage (1 trillion).
    pub const MAX_AMOUNT: Self = Money(Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0));

    /// Wrap a decimal value without rounding it.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Nearest `f64` to the exact decimal value.
    pub fn to_f64(self) -> f64 {
        let mantissa = self.0.mantissa();
        let scale = self.0.scale();

        // Both operands exact, so the quotient is correctly rounded
        if mantissa.unsigned_abs() <= EXACT_F64_MANTISSA && scale <= EXACT_F64_SCALE {
            mantissa as f64 / 10f64.powi(scale as i32)
        } else {
            self.0.to_f64().unwrap_or_default()
        }
    }

    /// Round a float to whole cents, midpoint away from zero.
    fn from_f64_rounded(value: f64) -> Self {
        // `as` saturates out-of-range values and maps NaN to 0
        let cents = (value * 100.0).round() as i64;
        Self(Decimal::new(cents, SCALE))
    }

    /// Round to two decimal places, midpoint away from zero.
    pub fn round(self) -> Self {
        Self::from_f64_rounded(self.to_f64())
    }

    /// Divide into `parts` equal shares and round the share.
    ///
    /// Zero parts is treated as one part.
    pub fn split(self, parts: usize) -> Self {
        Self::from_f64_rounded(self.to_f64() / parts.max(1) as f64)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True when the value lies inside the settlement dead zone.
    pub fn is_negligible(&self) -> bool {
        self.abs() <= Self::TOLERANCE
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<i32> for Money {
    fn from(value: i32) -> Self {
        Self(Decimal::from(value))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_f64_rounded(self.to_f64() + rhs.to_f64())
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_f64_rounded(self.to_f64() - rhs.to_f64())
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Folding with `Add` keeps the running sum rounded at every step.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}

// JSON carries money as plain numbers: whole amounts as integers (`120`),
// everything else as the shortest float that reads back to the same value.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::float::deserialize(deserializer).map(Money)
    }
}
